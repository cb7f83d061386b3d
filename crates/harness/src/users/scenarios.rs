//! Verification scenarios for the users resource
//!
//! Each scenario covers one API interaction end-to-end: it composes a
//! request from the registry templates, dispatches it, validates the
//! envelope, and runs its field checks as individually recorded steps.
//! Scenarios share nothing mutable, so an external runner may schedule
//! them in any order or in parallel.

use vouch_application::error::ScenarioResult;
use vouch_application::ports::{StepRecorder, Transport};
use vouch_application::scenario::{Scenario, StepLog, Verifier};
use vouch_domain::checks::{self, CheckFailure};
use vouch_domain::models::{
    CreateUserResponse, SingleUserResponse, UpdateUserResponse, UserRequestPayload,
    UsersListResponse,
};
use vouch_domain::report::ScenarioReport;
use vouch_domain::request::HttpMethod;

use super::specs;

/// Id of the user record the contract pins down.
pub const KNOWN_USER_ID: u64 = 2;

/// Id that the API is known to have no record for.
pub const MISSING_USER_ID: u64 = 23;

const KNOWN_USER_EMAIL: &str = "janet.weaver@reqres.in";
const KNOWN_USER_FIRST_NAME: &str = "Janet";
const KNOWN_USER_LAST_NAME: &str = "Weaver";
const KNOWN_USER_AVATAR: &str = "https://reqres.in/img/faces/2-image.jpg";
const SUPPORT_URL: &str =
    "https://contentcaddy.io?utm_source=reqres&utm_medium=json&utm_campaign=referral";
const SUPPORT_TEXT: &str =
    "Tired of writing endless social media content? Let Content Caddy generate it for you.";

fn user_path(id: u64) -> String {
    format!("/users/{id}")
}

/// Lists a page of users and verifies the paging fields.
///
/// # Errors
///
/// Returns a hard failure if the request cannot be dispatched, the
/// envelope differs, or the body does not match the list model.
pub async fn list_users<T, R>(
    verifier: &Verifier<T>,
    recorder: &R,
    page: u32,
) -> ScenarioResult<ScenarioReport>
where
    T: Transport,
    R: StepRecorder + ?Sized,
{
    let scenario = Scenario::new(
        "list users",
        specs::no_body_request(),
        HttpMethod::Get,
        "/users",
        specs::success_response(),
    )
    .with_query("page", page.to_string());

    let response: UsersListResponse = verifier.dispatch_as(&scenario).await?;

    let mut steps = StepLog::new(scenario.name, recorder);
    steps.check("total is positive", || {
        checks::gt("total", &response.total, &0)
    });
    steps.check("page echoes the requested number", || {
        checks::eq("page", &response.page, &page)
    });
    steps.check("user list is not empty", || {
        checks::not_empty("data", &response.data)
    });
    Ok(steps.finish())
}

/// Fetches the known user and verifies every contract-pinned field.
///
/// # Errors
///
/// Returns a hard failure if the request cannot be dispatched, the
/// envelope differs, or the body does not match the single-user model.
pub async fn get_single_user<T, R>(
    verifier: &Verifier<T>,
    recorder: &R,
) -> ScenarioResult<ScenarioReport>
where
    T: Transport,
    R: StepRecorder + ?Sized,
{
    let path = user_path(KNOWN_USER_ID);
    let scenario = Scenario::new(
        "get single user",
        specs::no_body_request(),
        HttpMethod::Get,
        &path,
        specs::success_response(),
    );

    let response: SingleUserResponse = verifier.dispatch_as(&scenario).await?;

    let user = response.data.as_ref();
    let support = response.support.as_ref();
    let mut steps = StepLog::new(scenario.name, recorder);
    steps.check("data.id matches the requested id", || {
        checks::eq("data.id", &checks::present("data", user)?.id, &KNOWN_USER_ID)
    });
    steps.check("data.email", || {
        checks::eq(
            "data.email",
            checks::present("data", user)?.email.as_str(),
            KNOWN_USER_EMAIL,
        )
    });
    steps.check("data.first_name", || {
        checks::eq(
            "data.first_name",
            checks::present("data", user)?.first_name.as_str(),
            KNOWN_USER_FIRST_NAME,
        )
    });
    steps.check("data.last_name", || {
        checks::eq(
            "data.last_name",
            checks::present("data", user)?.last_name.as_str(),
            KNOWN_USER_LAST_NAME,
        )
    });
    steps.check("data.avatar", || {
        checks::eq(
            "data.avatar",
            checks::present("data", user)?.avatar.as_str(),
            KNOWN_USER_AVATAR,
        )
    });
    steps.check("support.url", || {
        checks::eq(
            "support.url",
            checks::present("support", support)?.url.as_str(),
            SUPPORT_URL,
        )
    });
    steps.check("support.text", || {
        checks::eq(
            "support.text",
            checks::present("support", support)?.text.as_str(),
            SUPPORT_TEXT,
        )
    });
    Ok(steps.finish())
}

/// Looks up a user that does not exist and verifies the 404 body stays
/// empty of data.
///
/// # Errors
///
/// Returns a hard failure if the request cannot be dispatched, the
/// status differs from 404, or the body does not match the model.
pub async fn get_missing_user<T, R>(
    verifier: &Verifier<T>,
    recorder: &R,
) -> ScenarioResult<ScenarioReport>
where
    T: Transport,
    R: StepRecorder + ?Sized,
{
    let path = user_path(MISSING_USER_ID);
    let scenario = Scenario::new(
        "get missing user",
        specs::no_body_request(),
        HttpMethod::Get,
        &path,
        specs::not_found_response(),
    );

    let response: SingleUserResponse = verifier.dispatch_as(&scenario).await?;

    let mut steps = StepLog::new(scenario.name, recorder);
    steps.check("data is absent", || {
        checks::absent("data", response.data.as_ref())
    });
    steps.check("support is absent", || {
        checks::absent("support", response.support.as_ref())
    });
    Ok(steps.finish())
}

/// Creates a user and verifies the echoed payload, id, and timestamp.
///
/// # Errors
///
/// Returns a hard failure if the payload cannot be attached, the
/// request cannot be dispatched, the status differs from 201, or the
/// body does not match the creation model.
pub async fn create_user<T, R>(
    verifier: &Verifier<T>,
    recorder: &R,
) -> ScenarioResult<ScenarioReport>
where
    T: Transport,
    R: StepRecorder + ?Sized,
{
    let payload = UserRequestPayload::new("morpheus", "leader");
    let scenario = Scenario::new(
        "create user",
        specs::with_body_request(),
        HttpMethod::Post,
        "/users",
        specs::created_response(),
    )
    .with_payload(&payload)?;

    let response: CreateUserResponse = verifier.dispatch_as(&scenario).await?;

    let mut steps = StepLog::new(scenario.name, recorder);
    steps.check("name echoes the request", || {
        checks::eq("name", response.name.as_str(), payload.name.as_str())
    });
    steps.check("job echoes the request", || {
        checks::eq("job", response.job.as_str(), payload.job.as_str())
    });
    steps.check("id is not blank", || checks::non_blank("id", &response.id));
    steps.check("createdAt is a well-formed timestamp", || {
        checks::timestamp("createdAt", &response.created_at)
    });
    Ok(steps.finish())
}

/// Updates the known user and verifies the echoed payload and timestamp.
///
/// # Errors
///
/// Returns a hard failure if the payload cannot be attached, the
/// request cannot be dispatched, the status differs from 200, or the
/// body does not match the update model.
pub async fn update_user<T, R>(
    verifier: &Verifier<T>,
    recorder: &R,
) -> ScenarioResult<ScenarioReport>
where
    T: Transport,
    R: StepRecorder + ?Sized,
{
    let payload = UserRequestPayload::new("morpheus", "leader");
    let path = user_path(KNOWN_USER_ID);
    let scenario = Scenario::new(
        "update user",
        specs::with_body_request(),
        HttpMethod::Put,
        &path,
        specs::success_response(),
    )
    .with_payload(&payload)?;

    let response: UpdateUserResponse = verifier.dispatch_as(&scenario).await?;

    let mut steps = StepLog::new(scenario.name, recorder);
    steps.check("name echoes the request", || {
        checks::eq("name", response.name.as_str(), payload.name.as_str())
    });
    steps.check("job echoes the request", || {
        checks::eq("job", response.job.as_str(), payload.job.as_str())
    });
    steps.check("id is absent", || {
        checks::absent("id", response.id.as_ref())
    });
    steps.check("updatedAt is a well-formed timestamp", || {
        checks::timestamp("updatedAt", &response.updated_at)
    });
    Ok(steps.finish())
}

/// Deletes the known user and verifies the response carries no content.
///
/// # Errors
///
/// Returns a hard failure if the request cannot be dispatched or the
/// envelope differs from the no-content expectation.
pub async fn delete_user<T, R>(
    verifier: &Verifier<T>,
    recorder: &R,
) -> ScenarioResult<ScenarioReport>
where
    T: Transport,
    R: StepRecorder + ?Sized,
{
    let path = user_path(KNOWN_USER_ID);
    let scenario = Scenario::new(
        "delete user",
        specs::no_body_request(),
        HttpMethod::Delete,
        &path,
        specs::no_content_response(),
    );

    let envelope = verifier.dispatch(&scenario).await?;

    let mut steps = StepLog::new(scenario.name, recorder);
    steps.check("body is empty or null", || {
        if envelope.is_empty_or_null() {
            Ok(())
        } else {
            Err(CheckFailure::with_values(
                "delete response carries a body",
                "empty or null body",
                envelope.body_text(),
            ))
        }
    });
    Ok(steps.finish())
}
