//! Shared fixtures: SQLite pools and a throw-away listings HTTP service

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use jobwatch_core::domain::NewSubscriber;
use jobwatch_core::port::SubscriberRepository;
use jobwatch_infra_http::HttpExternalJobSource;
use jobwatch_infra_sqlite::{
    create_pool, run_migrations, JobPosting, SqliteJobStore, SqliteSubscriberRepository,
};
use sqlx::SqlitePool;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const LISTINGS: &str = r#"{
    "USA": [
        ["Cloud Engineer", 65000, "<skills><skill>AWS</skill><skill>Azure</skill><skill>Docker</skill></skills>"],
        ["Cloud Engineer", 48000.5, "<skills><skill>GCP</skill></skills>"]
    ],
    "Spain": [
        ["Machine Learning Engineer", 75000, "<skills><skill>Python</skill><skill>TensorFlow</skill></skills>"]
    ]
}"#;

pub async fn memory_pool() -> SqlitePool {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

pub async fn add_subscriber(
    pool: &SqlitePool,
    email: &str,
    titles: &[&str],
    countries: &[&str],
) -> String {
    SqliteSubscriberRepository::new(pool.clone())
        .upsert(&NewSubscriber {
            id: uuid::Uuid::new_v4().to_string(),
            name: "Test User".to_string(),
            email: email.to_string(),
            job_titles: titles.iter().map(|s| s.to_string()).collect(),
            preferred_countries: countries.iter().map(|s| s.to_string()).collect(),
            salary_min: 0,
            created_at: 0,
        })
        .await
        .unwrap()
}

pub async fn add_job(
    pool: &SqlitePool,
    id: &str,
    title: &str,
    country: &str,
    salary_min: i64,
    posted: DateTime<Utc>,
) {
    SqliteJobStore::new(pool.clone())
        .insert(&JobPosting {
            id: id.to_string(),
            title: title.to_string(),
            country: country.to_string(),
            salary_min,
            posted_date: posted.timestamp_millis(),
            created_at: 0,
        })
        .await
        .unwrap();
}

/// Listings service stub answering every request with one status and body
pub struct ListingsStub {
    pub base_url: String,
    request_lines: Arc<Mutex<Vec<String>>>,
}

impl ListingsStub {
    pub async fn start(status: u16, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let request_lines = Arc::new(Mutex::new(Vec::new()));

        let seen = request_lines.clone();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let seen = seen.clone();
                tokio::spawn(async move {
                    let mut buf = vec![0u8; 8192];
                    let mut read = 0;
                    while !buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut buf[read..]).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => read += n,
                        }
                    }
                    let request = String::from_utf8_lossy(&buf[..read]).to_string();
                    if let Some(line) = request.lines().next() {
                        seen.lock().unwrap().push(line.to_string());
                    }

                    let response = format!(
                        "HTTP/1.1 {} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self {
            base_url,
            request_lines,
        }
    }

    pub fn source(&self) -> HttpExternalJobSource {
        HttpExternalJobSource::new(self.base_url.clone(), Duration::from_secs(5)).unwrap()
    }

    /// Request targets seen so far, e.g. `/jobs?name=SRE&country=USA`
    pub fn targets(&self) -> Vec<String> {
        self.request_lines
            .lock()
            .unwrap()
            .iter()
            .filter_map(|line| line.split_whitespace().nth(1).map(str::to_string))
            .collect()
    }
}
