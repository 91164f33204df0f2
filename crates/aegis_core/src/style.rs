//! Style scopes and batched style writes
//!
//! A [`StyleScope`] is the rendering surface a theme is written to. In a
//! browser it is the document element plus the body; here [`Document`] keeps
//! the same two roots in memory and can render them as CSS.
//!
//! Writes go through a [`StyleBatch`] so that every property and class change
//! of one theme switch lands in a single commit.

use indexmap::{IndexMap, IndexSet};
use std::borrow::Cow;
use std::fmt::{self, Write as _};

/// A named CSS custom property (`--name: value`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomProperty {
    /// Property name without the `--` prefix
    pub name: Cow<'static, str>,
    pub value: String,
}

impl CustomProperty {
    pub fn new(name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for CustomProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{}: {};", self.name, self.value)
    }
}

/// The two roots that carry marker classes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScopeRoot {
    /// Document element (`:root`); also receives the custom properties
    Root,
    /// Body element
    Body,
}

impl ScopeRoot {
    pub const ALL: [ScopeRoot; 2] = [ScopeRoot::Root, ScopeRoot::Body];
}

/// Selects the classes a [`ClassSwap`] removes
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClassMatcher {
    /// Any of the listed class names
    Exact(&'static [&'static str]),
    /// Every class starting with the prefix
    Prefix(&'static str),
}

impl ClassMatcher {
    pub fn matches(&self, class: &str) -> bool {
        match self {
            ClassMatcher::Exact(names) => names.contains(&class),
            ClassMatcher::Prefix(prefix) => class.starts_with(prefix),
        }
    }
}

/// Remove every class matching `remove`, then add `add`.
///
/// Applying a swap leaves exactly one class of its group in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassSwap {
    pub remove: ClassMatcher,
    pub add: String,
}

impl ClassSwap {
    pub fn exact(group: &'static [&'static str], add: impl Into<String>) -> Self {
        Self {
            remove: ClassMatcher::Exact(group),
            add: add.into(),
        }
    }

    pub fn prefixed(prefix: &'static str, add: impl Into<String>) -> Self {
        Self {
            remove: ClassMatcher::Prefix(prefix),
            add: add.into(),
        }
    }
}

/// Ordered set of property writes and class swaps committed together
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleBatch {
    properties: Vec<CustomProperty>,
    swaps: Vec<ClassSwap>,
}

impl StyleBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        self.properties.push(CustomProperty::new(name, value));
        self
    }

    pub fn properties(mut self, properties: impl IntoIterator<Item = CustomProperty>) -> Self {
        self.properties.extend(properties);
        self
    }

    pub fn swap(mut self, swap: ClassSwap) -> Self {
        self.swaps.push(swap);
        self
    }

    pub fn property_list(&self) -> &[CustomProperty] {
        &self.properties
    }

    pub fn swap_list(&self) -> &[ClassSwap] {
        &self.swaps
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.swaps.is_empty()
    }
}

/// A rendering surface that accepts batched style writes
pub trait StyleScope: Send {
    /// Apply every property and class change of `batch` in one pass.
    fn commit(&mut self, batch: &StyleBatch);

    /// Current value of a custom property on the root scope
    fn property(&self, name: &str) -> Option<&str>;

    /// Whether `class` is present on `root`
    fn has_class(&self, root: ScopeRoot, class: &str) -> bool;
}

/// Insertion-ordered class set for one root
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: IndexSet<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, class: impl Into<String>) -> bool {
        self.classes.insert(class.into())
    }

    pub fn remove(&mut self, class: &str) -> bool {
        self.classes.shift_remove(class)
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Keep only classes for which `keep` returns true
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.classes.retain(|c| keep(c));
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    fn apply_swap(&mut self, swap: &ClassSwap) {
        self.retain(|c| !swap.remove.matches(c));
        self.add(swap.add.clone());
    }
}

/// Properties and classes of one root element
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleRoot {
    properties: IndexMap<String, String>,
    classes: ClassList,
}

impl StyleRoot {
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn classes(&self) -> &ClassList {
        &self.classes
    }

    pub fn classes_mut(&mut self) -> &mut ClassList {
        &mut self.classes
    }
}

/// In-memory document with a root and a body scope
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    root: StyleRoot,
    body: StyleRoot,
    commits: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self, which: ScopeRoot) -> &StyleRoot {
        match which {
            ScopeRoot::Root => &self.root,
            ScopeRoot::Body => &self.body,
        }
    }

    pub fn root_mut(&mut self, which: ScopeRoot) -> &mut StyleRoot {
        match which {
            ScopeRoot::Root => &mut self.root,
            ScopeRoot::Body => &mut self.body,
        }
    }

    /// Number of batches committed so far
    pub fn commit_count(&self) -> u64 {
        self.commits
    }

    /// Render the root properties as a `:root { ... }` block
    pub fn to_css(&self) -> String {
        let mut out = String::from(":root {\n");
        for (name, value) in self.root.properties() {
            let _ = writeln!(out, "  --{name}: {value};");
        }
        out.push_str("}\n");
        out
    }
}

impl StyleScope for Document {
    fn commit(&mut self, batch: &StyleBatch) {
        for prop in batch.property_list() {
            self.root
                .properties
                .insert(prop.name.to_string(), prop.value.clone());
        }
        for swap in batch.swap_list() {
            for which in ScopeRoot::ALL {
                self.root_mut(which).classes.apply_swap(swap);
            }
        }
        self.commits += 1;
        tracing::trace!(
            properties = batch.property_list().len(),
            swaps = batch.swap_list().len(),
            "Document::commit"
        );
    }

    fn property(&self, name: &str) -> Option<&str> {
        self.root.property(name)
    }

    fn has_class(&self, root: ScopeRoot, class: &str) -> bool {
        self.root(root).classes.contains(class)
    }
}
