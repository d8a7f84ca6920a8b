//! Canvas passthrough service
//!
//! Maps each gateway operation to exactly one upstream call.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, warn};

use crate::domain::{
    AccessToken, CanvasClient, CourseId, UpstreamBody, UpstreamError, UpstreamRequest,
};
use crate::infrastructure::observability::{record_upstream_request, UpstreamRequestMetricParams};

#[derive(Debug, Clone)]
pub struct CanvasService {
    client: Arc<dyn CanvasClient>,
    active_enrollments_only: bool,
}

impl CanvasService {
    pub fn new(client: Arc<dyn CanvasClient>, active_enrollments_only: bool) -> Self {
        Self {
            client,
            active_enrollments_only,
        }
    }

    /// Courses of the calling user
    pub async fn list_courses(&self, token: &AccessToken) -> Result<UpstreamBody, UpstreamError> {
        let request = UpstreamRequest::courses(self.active_enrollments_only);
        self.forward("list_courses", request, token).await
    }

    pub async fn list_assignments(
        &self,
        course_id: CourseId,
        token: &AccessToken,
    ) -> Result<UpstreamBody, UpstreamError> {
        let request = UpstreamRequest::assignments(course_id);
        self.forward("list_assignments", request, token).await
    }

    /// Submissions in a course, always restricted to the calling user
    pub async fn list_submissions(
        &self,
        course_id: CourseId,
        token: &AccessToken,
    ) -> Result<UpstreamBody, UpstreamError> {
        let request = UpstreamRequest::submissions(course_id);
        self.forward("list_submissions", request, token).await
    }

    async fn forward(
        &self,
        operation: &'static str,
        request: UpstreamRequest,
        token: &AccessToken,
    ) -> Result<UpstreamBody, UpstreamError> {
        let start = Instant::now();
        debug!(operation, path = %request.path(), "Forwarding to Canvas");

        let result = self.client.get_json(&request, token).await;
        let duration = start.elapsed();

        let outcome = match &result {
            Ok(_) => "success",
            Err(e) => {
                warn!(
                    operation,
                    path = %request.path(),
                    error = %e,
                    retryable = e.is_retryable(),
                    "Canvas call failed"
                );
                e.outcome()
            }
        };

        record_upstream_request(UpstreamRequestMetricParams {
            operation,
            outcome,
            duration,
        });

        result
    }
}
