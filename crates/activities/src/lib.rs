//! `activities` crate — the `Activity` trait, the parameter contract, and the
//! built-in string activities.
//!
//! Every activity — built-in and future kinds alike — must implement
//! [`Activity`]. The engine crate dispatches invocations through this trait
//! object after checking the declared parameter contract.

pub mod error;
pub mod params;
pub mod traits;
pub mod regex_replace;
pub mod encode_html;
pub mod mock;

pub use error::ActivityError;
pub use params::{ActivityDescriptor, InputParameterSet, OutputParameterSet, ParameterSpec};
pub use traits::{Activity, ActivityContext, BackendService, TraceSink, TracingSink};
pub use regex_replace::RegexReplace;
pub use encode_html::EncodeHtml;
