use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::kernel::services::ports::RemoteError;

pub(super) fn transport(error: reqwest::Error) -> RemoteError {
    RemoteError::Transport(error.to_string())
}

pub(super) fn check_status(response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if !status.is_success() {
        return Err(RemoteError::Status(status.as_u16()));
    }
    Ok(response)
}

pub(super) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RemoteError> {
    let response = check_status(response)?;
    response
        .json::<T>()
        .await
        .map_err(|e| RemoteError::Decode(e.to_string()))
}
