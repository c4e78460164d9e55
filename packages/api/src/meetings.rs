//! `/meetings` resource.

use std::future::Future;

use crate::client::{ApiClient, Query};
use crate::error::ApiError;
use crate::models::{Acknowledgement, MeetingRequest, NewMeetingRequest, RequestStatus, StatusUpdate};

pub trait MeetingsApi {
    /// `POST /meetings/`; 400 when the expert has meetings turned off.
    fn create_meeting_request(
        &self,
        request: &NewMeetingRequest,
    ) -> impl Future<Output = Result<MeetingRequest, ApiError>>;
    /// `GET /meetings/?user_id=&status=`
    fn list_meeting_requests(
        &self,
        user_id: Option<i64>,
        status: Option<&RequestStatus>,
    ) -> impl Future<Output = Result<Vec<MeetingRequest>, ApiError>>;
    /// `PUT /meetings/{id}`
    fn update_meeting_request(
        &self,
        id: i64,
        status: RequestStatus,
    ) -> impl Future<Output = Result<MeetingRequest, ApiError>>;
    /// `DELETE /meetings/{id}`
    fn delete_meeting_request(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Acknowledgement, ApiError>>;
    /// `GET /meetings/sent/{user_id}`
    fn list_sent_meeting_requests(
        &self,
        user_id: i64,
    ) -> impl Future<Output = Result<Vec<MeetingRequest>, ApiError>>;
    /// `GET /meetings/received/{user_id}`: requests addressed to this expert.
    fn list_received_meeting_requests(
        &self,
        user_id: i64,
    ) -> impl Future<Output = Result<Vec<MeetingRequest>, ApiError>>;
}

impl MeetingsApi for ApiClient {
    async fn create_meeting_request(
        &self,
        request: &NewMeetingRequest,
    ) -> Result<MeetingRequest, ApiError> {
        self.post("/meetings/", Some(request), &Query::new()).await
    }

    async fn list_meeting_requests(
        &self,
        user_id: Option<i64>,
        status: Option<&RequestStatus>,
    ) -> Result<Vec<MeetingRequest>, ApiError> {
        let query = Query::new()
            .with_opt("user_id", user_id)
            .with_opt("status", status);
        self.get("/meetings/", &query).await
    }

    async fn update_meeting_request(
        &self,
        id: i64,
        status: RequestStatus,
    ) -> Result<MeetingRequest, ApiError> {
        self.put(&format!("/meetings/{id}"), &StatusUpdate { status })
            .await
    }

    async fn delete_meeting_request(&self, id: i64) -> Result<Acknowledgement, ApiError> {
        self.delete(&format!("/meetings/{id}")).await
    }

    async fn list_sent_meeting_requests(
        &self,
        user_id: i64,
    ) -> Result<Vec<MeetingRequest>, ApiError> {
        self.get(&format!("/meetings/sent/{user_id}"), &Query::new())
            .await
    }

    async fn list_received_meeting_requests(
        &self,
        user_id: i64,
    ) -> Result<Vec<MeetingRequest>, ApiError> {
        self.get(&format!("/meetings/received/{user_id}"), &Query::new())
            .await
    }
}
