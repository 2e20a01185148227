use std::collections::{BTreeMap, HashMap};

/// Parameters handed to a route factory. `None` marks an optional parameter
/// that the pathname did not supply.
pub type RouteParams = HashMap<String, Option<String>>;

/// Concrete parameter values, as extracted by the linear matcher or supplied
/// to the URL builder.
pub type ParamMap = HashMap<String, String>;

pub type QueryParams = BTreeMap<String, String>;

pub type RouteId = u64;
pub type ListenerId = u64;
