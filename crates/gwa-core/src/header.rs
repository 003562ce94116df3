//! The preamble shared by every record.

use thiserror::Error;

use crate::enums::SetCommand;

/// Rejected index assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("record index must be positive, got {0}")]
    NotPositive(i32),

    #[error("record already has index {current}, cannot reassign to {requested}")]
    AlreadyAssigned { current: i32, requested: i32 },

    #[error("`{0}` needs a record with an index")]
    CommandNeedsIndex(SetCommand),

    #[error("`SET_NOINDEX` cannot be used on a record with index {0}")]
    CommandForbidsIndex(i32),
}

/// Identity and naming fields common to all records.
///
/// `version` is fixed at construction. `index` is absent only for records
/// that have not been committed yet; once assigned it cannot change.
///
/// `command` always agrees with `index`: it is `SET_NOINDEX` exactly while
/// the index is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordHeader {
    version: i32,
    index: Option<i32>,
    command: SetCommand,

    /// Display name without any embedded tags.
    pub name: Option<String>,

    /// Type key of the embedded application tag.
    pub sid: Option<String>,

    /// Application id carried in the name field's tag.
    pub application_id: Option<String>,

    /// Stream id carried in the name field's tag.
    pub stream_id: Option<String>,
}

impl RecordHeader {
    /// Create an unindexed header for schema `version`.
    pub fn new(version: i32) -> Self {
        Self {
            version,
            index: None,
            command: SetCommand::SetNoIndex,
            name: None,
            sid: None,
            application_id: None,
            stream_id: None,
        }
    }

    /// Create a header for schema `version` that already carries `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::NotPositive`] if `index` is zero or negative.
    pub fn with_index(version: i32, index: i32) -> Result<Self, IndexError> {
        let mut header = Self::new(version);
        header.assign_index(index)?;
        Ok(header)
    }

    /// Set the display name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Schema version this record was built for.
    pub fn version(&self) -> i32 {
        self.version
    }

    /// Record index, if assigned.
    pub fn index(&self) -> Option<i32> {
        self.index
    }

    /// Verb the record was read with, or will be written with.
    pub fn command(&self) -> SetCommand {
        self.command
    }

    /// Choose between `SET` and `SET_AT` for an indexed record.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `command` disagrees with whether the record
    /// has an index.
    pub fn set_command(&mut self, command: SetCommand) -> Result<(), IndexError> {
        match (command, self.index) {
            (SetCommand::SetNoIndex, Some(index)) => Err(IndexError::CommandForbidsIndex(index)),
            (SetCommand::Set | SetCommand::SetAt, None) => {
                Err(IndexError::CommandNeedsIndex(command))
            }
            _ => {
                self.command = command;
                Ok(())
            }
        }
    }

    /// Assign the record index.
    ///
    /// Assigning the index the record already has is a no-op. An unindexed
    /// record switches from `SET_NOINDEX` to `SET`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] if `index` is not positive or the record
    /// already has a different index.
    pub fn assign_index(&mut self, index: i32) -> Result<(), IndexError> {
        if index <= 0 {
            return Err(IndexError::NotPositive(index));
        }
        match self.index {
            Some(current) if current != index => Err(IndexError::AlreadyAssigned {
                current,
                requested: index,
            }),
            _ => {
                self.index = Some(index);
                if self.command == SetCommand::SetNoIndex {
                    self.command = SetCommand::Set;
                }
                Ok(())
            }
        }
    }
}
