use crate::errors::ProfileError;
use crate::models::Profile;
use crate::profiles::parse_profile;
use base64::{
    Engine as _,
    engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD},
};

/// Query parameter that carries a shared profile.
pub const SHARE_PARAM: &str = "share";

pub fn encode(profile: &Profile) -> Result<String, serde_json::Error> {
    let json = serde_json::to_vec(profile)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Path plus query that imports `profile` when opened.
pub fn share_path(profile: &Profile) -> Result<String, serde_json::Error> {
    Ok(format!("/?{SHARE_PARAM}={}", encode(profile)?))
}

/// Decodes a share parameter. Both base64 alphabets are accepted, with or
/// without padding. Spaces are read as `+`, since form decoding of a query
/// string turns an unescaped `+` into a space.
pub fn decode(param: &str) -> Result<Profile, ProfileError> {
    let restored = param.replace(' ', "+");
    let trimmed = restored.trim().trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(trimmed)
        .or_else(|_| STANDARD_NO_PAD.decode(trimmed))
        .map_err(|err| ProfileError::InvalidShareLink(err.to_string()))?;
    let json = String::from_utf8(bytes).map_err(|err| ProfileError::InvalidShareLink(err.to_string()))?;
    parse_profile(&json).map_err(|err| match err {
        ProfileError::InvalidImport(reason) => ProfileError::InvalidShareLink(reason),
        other => other,
    })
}
