mod client;
mod error;
mod resource;

pub use error::ApiError;
pub use resource::*;

use client::Client;
use log::*;
use reqwest::Method;

/// Responsible for asynchronous interaction with the dashboard's task API
/// including transformation of response data into explicitly-defined types.
///
pub struct TaskApi {
    client: Client,
}

impl TaskApi {
    /// Returns a new instance for the given base URL and optional bearer
    /// token.
    ///
    pub fn new(base_url: &str, access_token: Option<&str>) -> TaskApi {
        debug!("Initializing task API client for {}...", base_url);
        TaskApi {
            client: Client::new(base_url, access_token),
        }
    }

    /// Returns the tasks matching the given listing parameters. The remote
    /// endpoint understands `search`, `status`, and `assignee` only; any
    /// label narrowing happens client-side.
    ///
    pub async fn list(&self, params: &[(String, String)]) -> Result<Vec<Task>, ApiError> {
        debug!("Requesting tasks with {} listing parameters...", params.len());
        let tasks: Vec<Task> = self
            .client
            .call_json(Method::GET, "/tasks", params, None)
            .await?;
        debug!("Retrieved {} tasks.", tasks.len());
        Ok(tasks)
    }

    /// Returns a single task by id.
    ///
    pub async fn get(&self, id: &str) -> Result<Task, ApiError> {
        debug!("Requesting task {}...", id);
        self.client
            .call_json(Method::GET, &format!("/tasks/{}", id), &[], None)
            .await
    }

    /// Creates a new task and returns the stored representation.
    ///
    pub async fn create(&self, fields: &NewTask) -> Result<Task, ApiError> {
        debug!("Creating task '{}'...", fields.title);
        let body = serde_json::to_value(fields)?;
        self.client
            .call_json(Method::POST, "/tasks", &[], Some(body))
            .await
    }

    /// Applies a partial update to a task.
    ///
    pub async fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task, ApiError> {
        debug!("Updating task {}...", id);
        let body = serde_json::to_value(patch)?;
        self.client
            .call_json(Method::PATCH, &format!("/tasks/{}", id), &[], Some(body))
            .await
    }

    /// Deletes a task.
    ///
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        debug!("Deleting task {}...", id);
        self.client
            .call(Method::DELETE, &format!("/tasks/{}", id), &[], None)
            .await?;
        Ok(())
    }

    /// Moves a task to a different column/status, optionally at an explicit
    /// position within the column.
    ///
    pub async fn move_task(
        &self,
        id: &str,
        status: Status,
        position: Option<i64>,
    ) -> Result<Task, ApiError> {
        debug!("Moving task {} to status '{}'...", id, status);
        let body = serde_json::json!({ "status": status, "position": position });
        self.client
            .call_json(Method::PATCH, &format!("/tasks/{}/move", id), &[], Some(body))
            .await
    }

    /// Assigns a task to a user.
    ///
    pub async fn assign(&self, id: &str, assignee_id: &str) -> Result<Task, ApiError> {
        debug!("Assigning task {} to user {}...", id, assignee_id);
        let body = serde_json::json!({ "assignee_id": assignee_id });
        self.client
            .call_json(Method::POST, &format!("/tasks/{}/assign", id), &[], Some(body))
            .await
    }

    /// Returns the users known to the server, for assignee filter controls.
    ///
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        debug!("Requesting user list...");
        let users: Vec<User> = self
            .client
            .call_json(Method::GET, "/users", &[], None)
            .await?;
        debug!("Retrieved {} users.", users.len());
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use fake::uuid::UUIDv4;
    use fake::{Fake, Faker};
    use httpmock::MockServer;
    use serde_json::json;
    use uuid::Uuid;

    fn task_json(task: &Task) -> serde_json::Value {
        json!({
            "id": task.id,
            "title": task.title,
            "status": task.status,
            "labels": task.labels,
        })
    }

    #[tokio::test]
    async fn list_success() -> Result<()> {
        let token: Uuid = UUIDv4.fake();
        let mut tasks: [Task; 2] = [Faker.fake(), Faker.fake()];
        tasks[0].status = Status::Todo;

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET")
                    .path("/tasks")
                    .header("Authorization", &format!("Bearer {}", &token))
                    .query_param("status", "todo");
                then.status(200)
                    .json_body(json!([task_json(&tasks[0]), task_json(&tasks[1])]));
            })
            .await;

        let api = TaskApi::new(&server.base_url(), Some(&token.to_string()));
        let listed = api
            .list(&[("status".to_string(), "todo".to_string())])
            .await?;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, tasks[0].id);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn list_unauthorized() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/tasks");
                then.status(401);
            })
            .await;

        let api = TaskApi::new(&server.base_url(), None);
        let result = api.list(&[]).await;
        assert!(matches!(result, Err(ApiError::Api { status: 401, .. })));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn create_success() -> Result<()> {
        let task: Task = Faker.fake();

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/tasks")
                    .json_body_partial(r#"{ "title": "Fix login", "status": "backlog" }"#);
                then.status(201).json_body(task_json(&task));
            })
            .await;

        let api = TaskApi::new(&server.base_url(), None);
        let created = api.create(&NewTask::new("Fix login", Status::Backlog)).await?;
        assert_eq!(created.id, task.id);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn move_task_success() -> Result<()> {
        let mut task: Task = Faker.fake();
        task.status = Status::Done;

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("PATCH")
                    .path(format!("/tasks/{}/move", task.id))
                    .json_body_partial(r#"{ "status": "done" }"#);
                then.status(200).json_body(task_json(&task));
            })
            .await;

        let api = TaskApi::new(&server.base_url(), None);
        let moved = api.move_task(&task.id, Status::Done, None).await?;
        assert_eq!(moved.status, Status::Done);
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn delete_success() -> Result<()> {
        let id: Uuid = UUIDv4.fake();
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("DELETE").path(format!("/tasks/{}", id));
                then.status(204);
            })
            .await;

        let api = TaskApi::new(&server.base_url(), None);
        api.delete(&id.to_string()).await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn list_users_success() -> Result<()> {
        let users: [User; 2] = [Faker.fake(), Faker.fake()];

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("GET").path("/users");
                then.status(200).json_body(json!([
                    { "id": users[0].id, "username": users[0].username },
                    { "id": users[1].id, "username": users[1].username },
                ]));
            })
            .await;

        let api = TaskApi::new(&server.base_url(), None);
        let listed = api.list_users().await?;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].username, users[1].username);
        mock.assert_async().await;
        Ok(())
    }
}
