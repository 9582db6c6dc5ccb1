//! Guide - live answers when the backend is up, demo answers when it isn't
//!
//! Neither call ever fails: a proxy error of any kind (unreachable host,
//! non-2xx status, malformed body) degrades to the built-in demo content.

use yatra::{demo_reply, demo_weather_now, ChatExchange, Degrade, Location, WeatherReport};

use crate::api::YatraClient;

pub struct Guide {
    client: YatraClient,
}

impl Guide {
    pub fn new(client: YatraClient) -> Self {
        Self { client }
    }

    pub async fn weather_for(&self, location: &Location) -> WeatherReport {
        self.client.weather(location).await.or_mock(demo_weather_now)
    }

    pub async fn ask(&self, message: &str) -> ChatExchange {
        let reply = self.client.chat(message).await.or_mock(|| demo_reply(message));
        ChatExchange::new(message, reply)
    }
}
