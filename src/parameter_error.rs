//! Error handling for leg geometry validation

/// Reports a leg configuration the analytic solver cannot represent.
#[derive(Debug)]
pub enum ParameterError {
    /// A link offset has components outside the plane its joint rotates in.
    OffAxisLink { joint: &'static str },
    /// A link length along +Z is zero or negative.
    NonPositiveLinkLength { joint: &'static str },
    /// Two joints were configured with the same actuator id.
    DuplicateJointId(i32),
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ParameterError::OffAxisLink { joint } =>
                write!(f, "Off Axis Link: {} offset must lie on the link axis", joint),
            ParameterError::NonPositiveLinkLength { joint } =>
                write!(f, "Non Positive Link Length: {} must extend along +Z", joint),
            ParameterError::DuplicateJointId(id) =>
                write!(f, "Duplicate Joint Id: {}", id),
        }
    }
}

impl std::error::Error for ParameterError {}
