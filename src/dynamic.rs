use crate::error::{self, LibError};
use crate::numbers::Velocity;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Named loudness levels, from silence to the loudest possible velocity. The discriminant is the
/// velocity that the marking is played at.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub enum Dynamic {
    /// Silence, velocity `0`.
    None = 0,
    Pppp = 8,
    Ppp = 20,
    Pp = 31,
    P = 42,
    Mp = 53,
    Mf = 64,
    F = 80,
    Ff = 96,
    Fff = 112,
    Ffff = 127,
}

impl Default for Dynamic {
    fn default() -> Self {
        Dynamic::Mf
    }
}

impl Dynamic {
    /// The velocity for this dynamic marking.
    pub fn velocity(&self) -> Velocity {
        Velocity::new(*self as u8)
    }

    /// The abbreviation written in a score, e.g. `mf`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dynamic::None => "none",
            Dynamic::Pppp => "pppp",
            Dynamic::Ppp => "ppp",
            Dynamic::Pp => "pp",
            Dynamic::P => "p",
            Dynamic::Mp => "mp",
            Dynamic::Mf => "mf",
            Dynamic::F => "f",
            Dynamic::Ff => "ff",
            Dynamic::Fff => "fff",
            Dynamic::Ffff => "ffff",
        }
    }
}

impl From<Dynamic> for Velocity {
    fn from(value: Dynamic) -> Self {
        value.velocity()
    }
}

impl Display for Dynamic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dynamic {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Ok(parse_dynamic(s)?)
    }
}

fn parse_dynamic(s: &str) -> Result<Dynamic, LibError> {
    Ok(match s {
        "none" => Dynamic::None,
        "pppp" => Dynamic::Pppp,
        "ppp" => Dynamic::Ppp,
        "pp" => Dynamic::Pp,
        "p" => Dynamic::P,
        "mp" => Dynamic::Mp,
        "mf" => Dynamic::Mf,
        "f" => Dynamic::F,
        "ff" => Dynamic::Ff,
        "fff" => Dynamic::Fff,
        "ffff" => Dynamic::Ffff,
        _ => return error::UnknownDynamic { site: site!(), text: s }.fail(),
    })
}

#[test]
fn velocities() {
    assert_eq!(0, Dynamic::None.velocity().get());
    assert_eq!(8, Dynamic::Pppp.velocity().get());
    assert_eq!(64, Dynamic::default().velocity().get());
    assert_eq!(Velocity::default(), Dynamic::Mf.into());
    assert_eq!(127, Velocity::from(Dynamic::Ffff).get());
}

#[test]
fn parse_dynamics() {
    assert_eq!(Dynamic::Mf, "mf".parse::<Dynamic>().unwrap());
    assert_eq!(Dynamic::Fff, "fff".parse::<Dynamic>().unwrap());
    assert_eq!(Dynamic::None, "none".parse::<Dynamic>().unwrap());
    assert!("MF".parse::<Dynamic>().is_err());
    assert!("sfz".parse::<Dynamic>().is_err());
}

#[test]
fn dynamics_are_ordered_by_loudness() {
    let all = [
        Dynamic::None,
        Dynamic::Pppp,
        Dynamic::Ppp,
        Dynamic::Pp,
        Dynamic::P,
        Dynamic::Mp,
        Dynamic::Mf,
        Dynamic::F,
        Dynamic::Ff,
        Dynamic::Fff,
        Dynamic::Ffff,
    ];
    for pair in all.windows(2) {
        assert!(pair[0].velocity() < pair[1].velocity());
        assert_eq!(pair[0], pair[0].to_string().parse::<Dynamic>().unwrap());
    }
}
