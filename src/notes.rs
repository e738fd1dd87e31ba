use uuid::Uuid;

use crate::error::{Error, ErrorKind, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    id: Uuid,
    text: String,
}

impl Note {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Freeform notes in insertion order.
#[derive(Debug, Clone, Default)]
pub struct NoteList {
    notes: Vec<Note>,
}

impl NoteList {
    /// Appends a note. Blank text is ignored and yields `None`.
    pub fn add(&mut self, text: &str) -> Option<Uuid> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = Uuid::new_v4();
        self.notes.push(Note {
            id,
            text: text.to_owned(),
        });
        log::debug!("Added note {}", id);

        Some(id)
    }

    pub fn remove(&mut self, id: Uuid) -> Result<Note> {
        let idx = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| Error::new(ErrorKind::NoSuchEntry, &format!("no note with id {}", id)))?;

        Ok(self.notes.remove(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl<'a> Extend<&'a str> for NoteList {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for text in iter {
            self.add(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove() {
        let mut notes = NoteList::default();
        let first = notes.add(" buy milk ").unwrap();
        let second = notes.add("call home").unwrap();

        assert_ne!(first, second);
        assert_eq!(
            notes.iter().map(Note::text).collect::<Vec<_>>(),
            vec!["buy milk", "call home"]
        );

        assert_eq!(notes.remove(first).unwrap().text(), "buy milk");
        assert_eq!(notes.len(), 1);
        assert!(matches!(
            notes.remove(first).unwrap_err().kind,
            ErrorKind::NoSuchEntry
        ));
    }

    #[test]
    fn blank_notes_are_ignored() {
        let mut notes = NoteList::default();
        assert_eq!(notes.add("   "), None);
        notes.extend(["", "a", " "]);
        assert_eq!(notes.len(), 1);
    }
}
