//! Bounded shelf of quick links.

use serde::Deserialize;
use url::Url;

use crate::error::{Error, ErrorKind, Result};

pub const MAX_LINKS: usize = 4;

/// Host of `input`, which may lack a scheme (`github.com`).
pub fn domain_from_url(input: &str) -> Option<String> {
    let input = input.trim();
    let url = if input.contains("://") {
        Url::parse(input)
    } else {
        Url::parse(&format!("https://{}", input))
    };

    url.ok()?.host_str().map(str::to_owned)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuickLink {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl QuickLink {
    pub fn new(url: &str, title: Option<&str>) -> Self {
        QuickLink {
            url: url.trim().to_owned(),
            title: title
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_owned),
        }
    }

    pub fn domain(&self) -> Option<String> {
        domain_from_url(&self.url)
    }

    /// Title, falling back to the domain and then to the raw url.
    pub fn label(&self) -> String {
        self.title
            .clone()
            .or_else(|| self.domain())
            .unwrap_or_else(|| self.url.clone())
    }

    /// Address to open. Scheme-less input is taken as https.
    pub fn href(&self) -> String {
        if self.url.contains("://") {
            self.url.clone()
        } else {
            format!("https://{}", self.url)
        }
    }
}

#[derive(Debug, Clone)]
pub struct Shelf {
    links: Vec<QuickLink>,
    capacity: usize,
}

impl Default for Shelf {
    fn default() -> Self {
        Shelf::with_capacity(MAX_LINKS)
    }
}

impl Shelf {
    pub fn with_capacity(capacity: usize) -> Self {
        Shelf {
            links: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Whether the "add" slot is offered.
    pub fn can_add(&self) -> bool {
        self.links.len() < self.capacity
    }

    pub fn links(&self) -> &[QuickLink] {
        &self.links
    }

    /// Adds a link in front of the existing ones.
    pub fn add(&mut self, url: &str, title: Option<&str>) -> Result<&QuickLink> {
        if url.trim().is_empty() {
            return Err(Error::new(ErrorKind::InvalidUrl, "empty url"));
        }

        if !self.can_add() {
            return Err(Error::new(
                ErrorKind::ShelfFull,
                &format!("at most {} links", self.capacity),
            ));
        }

        let link = QuickLink::new(url, title);
        log::info!("Adding quick link '{}'", link.label());
        self.links.insert(0, link);

        Ok(&self.links[0])
    }

    pub fn remove(&mut self, index: usize) -> Result<QuickLink> {
        if index >= self.links.len() {
            return Err(Error::new(
                ErrorKind::NoSuchEntry,
                &format!("no quick link at position {}", index),
            ));
        }

        let link = self.links.remove(index);
        log::info!("Removed quick link '{}'", link.label());

        Ok(link)
    }
}
