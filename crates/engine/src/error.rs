/// Errors raised by the typed views over normalized race records.
///
/// Scoring itself never fails; these only surface when a caller asks for a
/// typed value or validates a published result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A driver code is not one to three ASCII letters or digits.
    #[error("Invalid driver code: {0:?}")]
    InvalidDriverCode(String),

    /// The safety-car flag is neither yes nor no.
    #[error("Invalid safety car flag: {0:?}")]
    InvalidSafetyCar(String),

    /// The number of retirements is not a non-negative integer.
    #[error("Invalid DNF count: {0:?}")]
    InvalidDnfCount(String),

    /// A finishing slot lies outside the scored grid.
    #[error("Slot {0} is outside the scored grid")]
    InvalidSlot(u8),

    /// The same driver occupies two official slots.
    #[error("Driver {0} is classified more than once")]
    DuplicateDriver(String),
}
