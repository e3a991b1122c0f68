mod as_you_type;
mod classifier;
mod config;
pub mod enums;
pub mod errors;
mod formatter;
mod geocoder;
mod helper_constants;
mod helper_functions;
mod helper_types;
mod normalizer;
mod phone_engine;
mod phone_number;
mod phone_number_regexps_and_mappings;
mod resolver;
mod validator;

pub use as_you_type::AsYouTypeFormatter;
pub use config::EngineConfig;
pub use enums::{CountryCodeSource, NumberLengthType, PhoneNumberFormat, PhoneNumberType};
pub use errors::{EngineError, GetExampleNumberError, ValidationError};
pub use phone_engine::PhoneEngine;
pub use phone_number::{FormatResult, NormalizedInput, ParsedNumber};

// Helper type for Result
pub type Result<T> = std::result::Result<T, EngineError>;
