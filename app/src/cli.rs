//! Command-line options and entry parsing

use clap::Parser;
use mortality::error::{validate_age, MortalityError};
use mortality::PetKind;

#[derive(Parser, Debug)]
#[command(name = "mortality-calc", version, about = "How much time is left, and who you share it with")]
pub struct Cli {
    /// Your age in years
    #[arg(long, value_parser = parse_age)]
    pub age: f64,

    /// A parent, as LABEL=AGE (repeatable)
    #[arg(long = "parent", value_name = "LABEL=AGE", value_parser = parse_person)]
    pub parents: Vec<PersonEntry>,

    /// A grandparent, as LABEL=AGE (repeatable)
    #[arg(long = "grandparent", value_name = "LABEL=AGE", value_parser = parse_person)]
    pub grandparents: Vec<PersonEntry>,

    /// A child, as LABEL=AGE (repeatable)
    #[arg(long = "child", value_name = "LABEL=AGE", value_parser = parse_person)]
    pub children: Vec<PersonEntry>,

    /// A pet, as NAME:dog|cat:AGE (repeatable)
    #[arg(long = "pet", value_name = "NAME:TYPE:AGE", value_parser = parse_pet)]
    pub pets: Vec<PetEntry>,

    /// Also report time with a child born when you are this old
    #[arg(long, value_name = "AGE", value_parser = parse_age)]
    pub future_child_at: Option<f64>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pub pretty: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonEntry {
    pub label: String,
    pub age: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PetEntry {
    pub name: String,
    pub kind: PetKind,
    pub age: f64,
}

fn invalid(entry: &str, reason: &str) -> MortalityError {
    MortalityError::InvalidEntry {
        entry: entry.to_string(),
        reason: reason.to_string(),
    }
}

pub fn parse_age(s: &str) -> Result<f64, MortalityError> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| invalid(s, "age is not a number"))?;
    validate_age(value)
}

pub fn parse_person(s: &str) -> Result<PersonEntry, MortalityError> {
    let (label, age) = s
        .rsplit_once('=')
        .ok_or_else(|| invalid(s, "expected LABEL=AGE"))?;
    let label = label.trim();
    if label.is_empty() {
        return Err(invalid(s, "label is empty"));
    }
    Ok(PersonEntry {
        label: label.to_string(),
        age: parse_age(age)?,
    })
}

pub fn parse_pet(s: &str) -> Result<PetEntry, MortalityError> {
    let mut parts = s.rsplitn(3, ':');
    let (Some(age), Some(kind), Some(name)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid(s, "expected NAME:TYPE:AGE"));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid(s, "name is empty"));
    }
    Ok(PetEntry {
        name: name.to_string(),
        kind: kind.parse()?,
        age: parse_age(age)?,
    })
}
