use serde::Deserialize;
use serde_with::DeserializeFromStr;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use phf::phf_map;
use termion::event::Key;

use crate::cmds::Cmd;
use crate::error::{Error, ErrorKind, Result};
use crate::search::SearchEngine;
use crate::shelf::{QuickLink, MAX_LINKS};

pub type KeyMap = HashMap<Key, Cmd>;

const CONFIG_PATH_ENV_VAR: &str = "PERCH_CONFIG_FILE";

const DEFAULT_PLACEHOLDER: &str = "جستجو";

static NAMED_KEYS: phf::Map<&'static str, Key> = phf_map! {
    "enter" => Key::Char('\n'),
    "return" => Key::Char('\n'),
    "space" => Key::Char(' '),
    "tab" => Key::Char('\t'),
    "esc" => Key::Esc,
    "backspace" => Key::Backspace,
    "delete" => Key::Delete,
    "left" => Key::Left,
    "right" => Key::Right,
    "up" => Key::Up,
    "down" => Key::Down,
    "home" => Key::Home,
    "end" => Key::End,
    "pageup" => Key::PageUp,
    "pagedown" => Key::PageDown,
};

/// A key binding as written in the config file: a single character, a named
/// key (`enter`, `left`, ...) or `ctrl-<char>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, DeserializeFromStr)]
pub struct KeySpec(pub Key);

impl FromStr for KeySpec {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(KeySpec(Key::Char(c)));
        }

        let lower = s.to_lowercase();
        if let Some(key) = NAMED_KEYS.get(lower.as_str()) {
            return Ok(KeySpec(*key));
        }

        if let Some(rest) = lower.strip_prefix("ctrl-") {
            let mut chars = rest.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return Ok(KeySpec(Key::Ctrl(c)));
            }
        }

        Err(format!("unknown key '{}'", s))
    }
}

pub(crate) fn find_configfile_locations() -> io::Result<Vec<PathBuf>> {
    let config_env = env::var(CONFIG_PATH_ENV_VAR).ok().map(PathBuf::from);

    let home = dirs::home_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::Other, "Unable to find home directory")
    })?;

    let config_xdg = dirs::config_dir()
        .unwrap_or_else(|| home.join(".config"))
        .join("perch")
        .join("config.toml");

    let mut locations = vec![config_xdg, home.join(".perch.toml")];

    if let Some(path) = config_env {
        locations.insert(0, path);
    }

    Ok(locations)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThemeSpec {
    today_char: Option<char>,
    selected_char: Option<char>,
    focus_char: Option<char>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    max_links: Option<usize>,
    search_engine: Option<String>,
    search_placeholder: Option<String>,
    theme: ThemeSpec,
    keys: HashMap<KeySpec, Cmd>,
    links: Vec<QuickLink>,
    notes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub key_map: KeyMap,
    pub max_links: usize,
    pub search_engine: SearchEngine,
    pub search_placeholder: String,
    pub today_char: Option<char>,
    pub selected_char: Option<char>,
    pub focus_char: Option<char>,
    pub links: Vec<QuickLink>,
    pub notes: Vec<String>,
}

impl Default for Config {
    fn default() -> Config {
        let mut config = Config {
            key_map: HashMap::new(),
            max_links: MAX_LINKS,
            search_engine: SearchEngine::default(),
            search_placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            today_char: Some('*'),
            selected_char: Some('>'),
            focus_char: None,
            links: Vec::new(),
            notes: Vec::new(),
        };

        config.key_map.insert(Key::Char('h'), Cmd::PrevDay);
        config.key_map.insert(Key::Char('l'), Cmd::NextDay);
        config.key_map.insert(Key::Char('k'), Cmd::PrevWeek);
        config.key_map.insert(Key::Char('j'), Cmd::NextWeek);
        config.key_map.insert(Key::Left, Cmd::PrevDay);
        config.key_map.insert(Key::Right, Cmd::NextDay);
        config.key_map.insert(Key::Up, Cmd::PrevWeek);
        config.key_map.insert(Key::Down, Cmd::NextWeek);
        config.key_map.insert(Key::Char('p'), Cmd::PrevMonth);
        config.key_map.insert(Key::Char('n'), Cmd::NextMonth);
        config.key_map.insert(Key::Char('P'), Cmd::PrevYear);
        config.key_map.insert(Key::Char('N'), Cmd::NextYear);
        config.key_map.insert(Key::Char('\n'), Cmd::Confirm);
        config.key_map.insert(Key::Char(' '), Cmd::Confirm);
        config.key_map.insert(Key::Char('/'), Cmd::Search);
        config.key_map.insert(Key::Char('a'), Cmd::AddLink);
        config.key_map.insert(Key::Char(']'), Cmd::NextLink);
        config.key_map.insert(Key::Char('o'), Cmd::OpenLink);
        config.key_map.insert(Key::Char('x'), Cmd::RemoveLink);
        config.key_map.insert(Key::Char('i'), Cmd::AddNote);
        config.key_map.insert(Key::Char('}'), Cmd::NextNote);
        config.key_map.insert(Key::Char('X'), Cmd::RemoveNote);
        config.key_map.insert(Key::Char('q'), Cmd::Exit);

        config
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(content: &str) -> Result<Config> {
        let file: ConfigFile = toml::from_str(content)?;
        let mut config = Config::default();

        if let Some(max_links) = file.max_links {
            config.max_links = max_links;
        }

        if let Some(engine) = file.search_engine {
            config.search_engine = SearchEngine::new(&engine)
                .map_err(|e| e.with_msg(&format!("search_engine '{}' is not a url", engine)))?;
        }

        if let Some(placeholder) = file.search_placeholder {
            config.search_placeholder = placeholder;
        }

        config.today_char = file.theme.today_char.or(config.today_char);
        config.selected_char = file.theme.selected_char.or(config.selected_char);
        config.focus_char = file.theme.focus_char.or(config.focus_char);

        config
            .key_map
            .extend(file.keys.into_iter().map(|(KeySpec(key), cmd)| (key, cmd)));

        if file.links.len() > config.max_links {
            return Err(Error::new(
                ErrorKind::Config,
                &format!(
                    "{} links configured but max_links is {}",
                    file.links.len(),
                    config.max_links
                ),
            ));
        }

        config.links = file.links;
        config.notes = file.notes;

        Ok(config)
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)?;
        content.parse::<Config>().map_err(|e| match e.kind {
            ErrorKind::IOError(_) => e,
            _ => {
                let msg = format!(
                    "{} ({})",
                    e.message.as_deref().unwrap_or_default(),
                    path.display()
                );
                e.with_msg(&msg)
            }
        })
    }
}

/// Loads the config at `path`, or the first one found in the default
/// locations. Falls back to the built-in defaults if there is none.
pub fn load_suitable_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        log::info!("Loading config from {}", path.display());
        return Config::from_file(path);
    }

    for location in find_configfile_locations()? {
        if location.is_file() {
            log::info!("Loading config from {}", location.display());
            return Config::from_file(&location);
        }
        log::debug!("No config at {}", location.display());
    }

    log::info!("No config file found, using defaults");
    Ok(Config::default())
}
