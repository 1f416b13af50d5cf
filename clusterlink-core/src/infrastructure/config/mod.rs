pub mod settings;

pub use settings::{
    CredentialSettings, EndpointPaths, EndpointSettings, Settings, load_settings,
    load_settings_from,
};
