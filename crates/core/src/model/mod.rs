mod answer;
mod code;
mod credentials;
mod source;

pub use answer::{AnswerRecord, Resolution, ResolvedAnswer, invert};
pub use code::{AttachmentCode, CodeError};
pub use credentials::{Credentials, CredentialsError, PrivilegeMode};
pub use source::{ImageSource, SourceError};
