//! Data model types for the course catalog.
//!
//! A catalog is a list of courses, each owning its modules, each module
//! owning its clips. Positions are 1-based and dense within their parent.
//! Parent links are never stored on children; use [`ModuleRef`] and
//! [`ClipRef`] to walk the tree with the owning entities in hand.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rendered in place of an author that the store left empty.
pub const UNKNOWN_AUTHOR: &str = "unknown";

// ── Course ──────────────────────────────────────────────────────────────────

/// A video course and its ordered modules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    /// External identifier, stable across stores. Not the internal row key.
    pub id: String,
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl Course {
    /// A course with no modules yet.
    pub fn new(title: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
            modules: Vec::new(),
        }
    }

    /// Look up a module by its 1-based position.
    pub fn module(&self, position: u32) -> Option<&Module> {
        self.modules.iter().find(|m| m.position == position)
    }

    /// Total number of clips across all modules.
    pub fn clip_count(&self) -> usize {
        self.modules.iter().map(|m| m.clips.len()).sum()
    }

    /// Iterate modules together with a reference back to this course.
    pub fn modules_iter(&self) -> impl Iterator<Item = ModuleRef<'_>> {
        self.modules.iter().map(move |module| ModuleRef {
            course: self,
            module,
        })
    }

    /// Iterate every clip in display order, paired with its course and module.
    pub fn clips(&self) -> impl Iterator<Item = ClipRef<'_>> {
        self.modules_iter().flat_map(|m| m.clips())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id)
    }
}

// ── Module ──────────────────────────────────────────────────────────────────

/// A course module. `position` comes from enumeration order, not the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub position: u32,
    pub title: String,
    pub id: String,
    /// `None` when the store has an author row without a name.
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub clips: Vec<Clip>,
}

impl Module {
    pub fn new(
        position: u32,
        title: impl Into<String>,
        id: impl Into<String>,
        author: Option<String>,
    ) -> Self {
        Self {
            position,
            title: title.into(),
            id: id.into(),
            author,
            clips: Vec::new(),
        }
    }

    /// Look up a clip by its 1-based position.
    pub fn clip(&self, position: u32) -> Option<&Clip> {
        self.clips.iter().find(|c| c.position == position)
    }

    pub fn author_or_unknown(&self) -> &str {
        self.author.as_deref().unwrap_or(UNKNOWN_AUTHOR)
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} [{}]", self.position, self.title, self.id)
    }
}

// ── Clip ────────────────────────────────────────────────────────────────────

/// A single video clip, the leaf of the catalog tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    pub position: u32,
    pub title: String,
    pub id: String,
}

impl Clip {
    pub fn new(position: u32, title: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            position,
            title: title.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for Clip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} [{}]", self.position, self.title, self.id)
    }
}

// ── Navigation ──────────────────────────────────────────────────────────────

/// A module borrowed together with the course that owns it.
#[derive(Debug, Clone, Copy)]
pub struct ModuleRef<'a> {
    pub course: &'a Course,
    pub module: &'a Module,
}

impl<'a> ModuleRef<'a> {
    pub fn clips(self) -> impl Iterator<Item = ClipRef<'a>> {
        self.module.clips.iter().map(move |clip| ClipRef {
            course: self.course,
            module: self.module,
            clip,
        })
    }
}

/// A clip borrowed together with its owning module and course.
#[derive(Debug, Clone, Copy)]
pub struct ClipRef<'a> {
    pub course: &'a Course,
    pub module: &'a Module,
    pub clip: &'a Clip,
}
