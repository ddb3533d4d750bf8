//! HTTP Task Store
//!
//! `reqwest` implementation of [`TaskStore`] against the `/tasks` resource.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{Session, StoreError, StoreResult, TaskStore};
use crate::models::{NewTask, Task, TaskId, TaskPatch};

pub struct HttpTaskStore {
    client: reqwest::Client,
    base_url: String,
    session: Session,
}

impl HttpTaskStore {
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    fn tasks_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn task_url(&self, id: &TaskId) -> String {
        format!(
            "{}/tasks/{}",
            self.base_url,
            utf8_percent_encode(id.as_str(), NON_ALPHANUMERIC)
        )
    }

    /// Request with the bearer credential attached when signed in
    fn request(&self, method: Method, url: String) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> StoreResult<reqwest::Response> {
        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, "task request did not complete");
            StoreError::Network(e.to_string())
        })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = StoreError::from_response(status.as_u16(), &body);
        warn!(status = status.as_u16(), error = %err, "task request rejected");
        Err(err)
    }

    async fn execute_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> StoreResult<T> {
        self.execute(builder)
            .await?
            .json::<T>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl TaskStore for HttpTaskStore {
    async fn list(&self) -> StoreResult<Vec<Task>> {
        debug!("GET /tasks");
        let tasks: Vec<Task> = self.execute_json(self.request(Method::GET, self.tasks_url())).await?;
        debug!(count = tasks.len(), "tasks loaded");
        Ok(tasks)
    }

    async fn create(&self, task: &NewTask) -> StoreResult<Task> {
        debug!(title = %task.title, "POST /tasks");
        self.execute_json(self.request(Method::POST, self.tasks_url()).json(task))
            .await
    }

    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> StoreResult<Task> {
        debug!(%id, ?patch, "PUT /tasks/:id");
        self.execute_json(self.request(Method::PUT, self.task_url(id)).json(patch))
            .await
    }

    async fn delete(&self, id: &TaskId) -> StoreResult<()> {
        debug!(%id, "DELETE /tasks/:id");
        self.execute(self.request(Method::DELETE, self.task_url(id)))
            .await
            .map(|_| ())
    }
}
