use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cmd {
    Noop,
    PrevDay,
    NextDay,
    PrevWeek,
    NextWeek,
    PrevMonth,
    NextMonth,
    PrevYear,
    NextYear,
    Confirm,
    Search,
    AddLink,
    NextLink,
    OpenLink,
    RemoveLink,
    AddNote,
    NextNote,
    RemoveNote,
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        cmd: Cmd,
    }

    #[test]
    fn deserializes_snake_case() {
        let w: Wrapper = toml::from_str(r#"cmd = "next_month""#).unwrap();
        assert_eq!(w.cmd, Cmd::NextMonth);

        let w: Wrapper = toml::from_str(r#"cmd = "remove_link""#).unwrap();
        assert_eq!(w.cmd, Cmd::RemoveLink);

        assert!(toml::from_str::<Wrapper>(r#"cmd = "NextMonth""#).is_err());
    }
}
