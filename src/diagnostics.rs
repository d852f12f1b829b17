//! Read-only reports produced by the registry's listing operations.

use std::fmt;

use serde::Serialize;

/// One non-empty container: its component type and who is in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerSummary {
    pub component: &'static str,
    pub count: usize,
    pub entities: Vec<u32>,
}

impl fmt::Display for ContainerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:4} components of type {}", self.count, self.component)?;
        write!(f, "    ")?;
        for (i, entity) in self.entities.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "#{entity}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentSlot {
    pub component: &'static str,
    pub slot: usize,
}

/// Component types attached to a single entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityReport {
    pub entity: u32,
    pub components: Vec<ComponentSlot>,
}

impl fmt::Display for EntityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Debug info on components of entity #{}:", self.entity)?;
        for entry in &self.components {
            write!(
                f,
                "\n  type {}, stored at location {}",
                entry.component, entry.slot
            )?;
        }
        Ok(())
    }
}
