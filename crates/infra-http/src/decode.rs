// External response decoding
//
// Body shape: { "<country>": [ [title, salary, skills_xml], ... ], ... }

use crate::skills::parse_skills;
use jobwatch_core::domain::ExternalJobRecord;
use jobwatch_core::error::{AppError, Result};
use serde_json::Value;
use std::collections::HashMap;

/// Decode the listings for `country` out of a response body
///
/// Records that are too short or carry the wrong element types are
/// skipped. A malformed skills payload fails the whole response.
///
/// # Errors
/// - AppError::Decode if the body is not an object of arrays of arrays
/// - AppError::NotFound if `country` is not a key of the body
pub fn decode_response(body: &[u8], country: &str) -> Result<Vec<ExternalJobRecord>> {
    let mut by_country: HashMap<String, Vec<Vec<Value>>> = serde_json::from_slice(body)
        .map_err(|e| AppError::Decode(format!("could not decode response: {}", e)))?;

    let records = by_country
        .remove(country)
        .ok_or_else(|| AppError::NotFound(format!("no jobs found for country: {}", country)))?;

    let mut jobs = Vec::with_capacity(records.len());
    for record in &records {
        if let Some(job) = decode_record(record)? {
            jobs.push(job);
        }
    }
    Ok(jobs)
}

fn decode_record(record: &[Value]) -> Result<Option<ExternalJobRecord>> {
    let [title, salary, skills, ..] = record else {
        return Ok(None);
    };
    let (Some(title), Some(salary), Some(skills)) = (title.as_str(), salary.as_f64(), skills.as_str())
    else {
        return Ok(None);
    };

    Ok(Some(ExternalJobRecord::new(
        title,
        salary as i64,
        parse_skills(skills)?,
    )))
}
