use crate::{AppError, ExceptionMapping};

/// One rule in the classifier chain.
///
/// Each implementation also exposes an inherent `PRIORITY` constant; the
/// trait method returns it so mappers can live behind `dyn`. Higher
/// priority is consulted first: domain mappers use 100, generic
/// framework-level mappers use lower values.
pub trait ExceptionMapper: Send + Sync {
    fn priority(&self) -> i32;

    /// Short name used in logs and registration errors
    fn name(&self) -> &'static str;

    fn can_handle(&self, error: &AppError) -> bool;

    /// Only meaningful when `can_handle(error)` is true.
    fn map(&self, error: &AppError) -> ExceptionMapping;
}
