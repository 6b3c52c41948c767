use std::cell::RefCell;
use std::rc::Rc;

use anyhow::bail;
use getset::Getters;
use indexmap::IndexMap;

use crate::types::{InfoType, InfoValue, MISSING_INT};

/// One entry of the header's INFO dictionary.
#[derive(Debug, Clone, Getters)]
#[getset(get = "pub")]
pub struct HeaderInfo {
    pub(crate) id: String,
    kind: InfoType,
    description: String,
}

impl HeaderInfo {
    pub fn new(id: impl Into<String>, kind: InfoType, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            description: description.into(),
        }
    }
}

/// The header a record was read against: the INFO dictionary (insertion
/// order preserved) and the sample names.
#[derive(Debug, Clone, Default, Getters)]
#[getset(get = "pub")]
pub struct Header {
    pub(crate) info: IndexMap<String, HeaderInfo>,
    pub(crate) samples: Vec<String>,
}

impl Header {
    pub fn new(samples: Vec<String>) -> Self {
        Self {
            info: IndexMap::new(),
            samples,
        }
    }

    /// Declare an INFO field. Updates through [`RecordHandle::update_info`]
    /// are rejected for undeclared fields.
    pub fn with_info(mut self, entry: HeaderInfo) -> Self {
        self.info.insert(entry.id.clone(), entry);
        self
    }
}

/// Shared handle to one underlying variant record: the header it was read
/// against plus its mutable INFO fields. Every call read from the same record
/// clones the same `Rc<RecordHandle>`, so the record's storage is dropped
/// exactly when the last such call goes away.
///
/// Reads are permissive: an absent field, a field stored under a different
/// type than requested, or a stored missing sentinel all come back as `None`.
/// Updates validate against the header dictionary, mirroring the status codes
/// of a real record store.
#[derive(Debug)]
pub struct RecordHandle {
    header: Rc<Header>,
    fields: RefCell<IndexMap<String, InfoValue>>,
}

impl RecordHandle {
    pub fn new(header: Rc<Header>) -> Rc<Self> {
        Rc::new(Self {
            header,
            fields: RefCell::new(IndexMap::new()),
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn info_int(&self, key: &str) -> Option<i32> {
        match self.fields.borrow().get(key) {
            Some(InfoValue::Int(v)) if *v != MISSING_INT => Some(*v),
            _ => None,
        }
    }

    pub fn info_float(&self, key: &str) -> Option<f32> {
        match self.fields.borrow().get(key) {
            Some(InfoValue::Float(v)) if !v.is_nan() => Some(*v),
            _ => None,
        }
    }

    pub fn info_string(&self, key: &str) -> Option<String> {
        match self.fields.borrow().get(key) {
            Some(InfoValue::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    /// A flag is "set" whenever the field is present, whatever its value.
    pub fn has_flag(&self, key: &str) -> bool {
        self.fields.borrow().contains_key(key)
    }

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// Fails if `key` is not declared in the header dictionary or the value
    /// does not match the declared type.
    pub fn update_info(&self, key: &str, value: InfoValue) -> anyhow::Result<()> {
        let declared = match self.header.info.get(key) {
            Some(entry) => entry.kind(),
            None => bail!("INFO field {} is not declared in the header", key),
        };
        if *declared != value.kind() {
            bail!(
                "INFO field {} is declared as {:?}, cannot store {:?}",
                key,
                declared,
                value.kind()
            );
        }
        self.fields.borrow_mut().insert(key.to_owned(), value);
        Ok(())
    }

    /// Remove the field; removing an absent field is a no-op.
    pub fn delete_info(&self, key: &str) {
        self.fields.borrow_mut().shift_remove(key);
    }
}
