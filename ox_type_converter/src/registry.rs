use crate::logical_type::LogicalType;
use crate::HashMap;
use lazy_static::lazy_static;
use log::{debug, trace};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Default alias table: one or more names per type.
pub const DEFAULT_ALIASES: &[(LogicalType, &[&str])] = &[
    (LogicalType::Int32, &["int", "int32"]),
    (LogicalType::Int64, &["int64"]),
    (LogicalType::Boolean, &["bool", "boolean"]),
    (LogicalType::Float32, &["float32"]),
    (LogicalType::Float64, &["float64", "double"]),
    (LogicalType::Text, &["string"]),
    (LogicalType::Date, &["date"]),
    (LogicalType::DateTime, &["datetime"]),
    (LogicalType::Int32List, &["ints"]),
    (LogicalType::Float32List, &["float32s"]),
    (LogicalType::Float64List, &["float64s"]),
    (LogicalType::TextList, &["strings"]),
    (LogicalType::BooleanList, &["bools"]),
    (LogicalType::DateList, &["dates"]),
    (LogicalType::DateTimeList, &["datetimes"]),
];

lazy_static! {
    /// The process-wide registry used by every converter built without an
    /// explicit registry. Aliases added here are visible to all of them.
    pub static ref DEFAULT_TYPE_REGISTRY: Arc<TypeRegistry> = Arc::new(TypeRegistry::with_defaults());
}

#[derive(Debug, Default)]
struct AliasTable {
    case_insensitive: bool,
    exact: HashMap<String, LogicalType>,
    // keyed by lowercased alias
    folded: HashMap<String, LogicalType>,
}

/// Registry resolving type names to [`LogicalType`]s.
///
/// Aliases are unique: registering an alias that already exists moves it
/// to the new type. There is no removal.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    table: RwLock<AliasTable>,
}

impl TypeRegistry {
    /// Create an empty, case-sensitive registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a case-sensitive registry holding the default aliases
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.reserve(DEFAULT_ALIASES.iter().map(|(_, names)| names.len()).sum());
        for (logical_type, names) in DEFAULT_ALIASES {
            registry.add_alias(*logical_type, *names);
        }
        registry
    }

    /// Create a registry from an explicit alias table
    pub fn with_aliases<I, S>(case_insensitive: bool, aliases: I) -> Self
    where
        I: IntoIterator<Item = (LogicalType, Vec<S>)>,
        S: AsRef<str>,
    {
        let registry = Self::new();
        registry.set_case_insensitive(case_insensitive);
        for (logical_type, names) in aliases {
            registry.add_alias(logical_type, names.as_slice());
        }
        registry
    }

    fn read(&self) -> RwLockReadGuard<'_, AliasTable> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, AliasTable> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enable or disable the case-folded fallback lookup
    pub fn set_case_insensitive(&self, enabled: bool) {
        self.write().case_insensitive = enabled;
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.read().case_insensitive
    }

    /// Reserve room for `additional` more aliases
    pub fn reserve(&self, additional: usize) {
        let mut table = self.write();
        table.exact.reserve(additional);
        table.folded.reserve(additional);
    }

    /// Register one or more aliases for a type, overwriting any previous owner
    pub fn add_alias<S: AsRef<str>>(&self, logical_type: LogicalType, names: &[S]) {
        let mut table = self.write();
        for name in names {
            let name = name.as_ref();
            if let Some(previous) = table.exact.insert(name.to_string(), logical_type) {
                if previous != logical_type {
                    debug!("Alias '{}' moved from {} to {}", name, previous, logical_type);
                }
            } else {
                debug!("Registered alias '{}' for {}", name, logical_type);
            }
            table.folded.insert(name.to_lowercase(), logical_type);
        }
    }

    /// Resolve a type name; `LogicalType::Unknown` if nothing matches
    pub fn resolve(&self, name: &str) -> LogicalType {
        let table = self.read();
        let resolved = table
            .exact
            .get(name)
            .or_else(|| {
                if table.case_insensitive {
                    table.folded.get(&name.to_lowercase())
                } else {
                    None
                }
            })
            .copied()
            .unwrap_or(LogicalType::Unknown);
        trace!("Resolved type name '{}' to {}", name, resolved);
        resolved
    }

    /// Check if a name resolves to a known type
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name) != LogicalType::Unknown
    }

    /// All aliases currently owned by a type, sorted
    pub fn aliases_for(&self, logical_type: LogicalType) -> Vec<String> {
        let mut names: Vec<String> = self
            .read()
            .exact
            .iter()
            .filter(|(_, owner)| **owner == logical_type)
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }

    /// Every registered alias with its type, sorted by alias
    pub fn aliases(&self) -> Vec<(String, LogicalType)> {
        let mut aliases: Vec<(String, LogicalType)> = self
            .read()
            .exact
            .iter()
            .map(|(name, owner)| (name.clone(), *owner))
            .collect();
        aliases.sort();
        aliases
    }

    pub fn len(&self) -> usize {
        self.read().exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().exact.is_empty()
    }
}
