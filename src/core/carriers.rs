use std::sync::Arc;

/// Ordered carrier identifiers tried against the aggregator
///
/// Built once at startup and shared read-only between workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierList {
    ids: Arc<[String]>,
}

impl CarrierList {
    /// Build from configured identifiers, dropping blanks and repeats while
    /// keeping first-seen order.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into().trim().to_string();
            if !id.is_empty() && !unique.contains(&id) {
                unique.push(id);
            }
        }

        Self { ids: unique.into() }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Order in which carriers are probed for one request
    ///
    /// A caller-supplied carrier goes first, then the configured list
    /// without it.
    pub fn attempt_order<'a>(&'a self, preferred: Option<&'a str>) -> Vec<&'a str> {
        let mut order = Vec::with_capacity(self.len() + 1);
        if let Some(first) = preferred {
            order.push(first);
        }
        order.extend(self.iter().filter(|id| Some(*id) != preferred));
        order
    }
}
