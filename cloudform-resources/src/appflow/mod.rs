//! Amazon AppFlow

pub mod connector_profile;

pub use connector_profile::ConnectorProfile;
