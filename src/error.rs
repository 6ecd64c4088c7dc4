use snafu::Snafu;

/// The public Error type for this library.
#[derive(Debug, Snafu)]
pub struct Error(LibError);

/// The public Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

/// The internal Result type for this library.
pub(crate) type LibResult<T> = std::result::Result<T, LibError>;

/// The internal Error type for this library.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[snafu(context(suffix(false)))]
pub(crate) enum LibError {
    #[snafu(display(
        "{} '{}' is not a dynamic marking, expected one of none, pppp..ffff",
        site,
        text
    ))]
    UnknownDynamic { site: String, text: String },

    #[snafu(display("{} '{}' is not a note name, expected C, C#, Db, D ... B", site, name))]
    UnknownNoteName { site: String, name: String },

    #[snafu(display("{} Error while writing data: {}", site, source))]
    Write {
        site: String,
        source: std::io::Error,
    },
}

macro_rules! site {
    () => {
        format!("{}:{}", file!(), line!())
    };
}

macro_rules! wr {
    () => {
        crate::error::Write { site: site!() }
    };
}

#[test]
fn site_test() {
    let line = line!() + 1;
    let site = site!();
    assert!(site.contains("error.rs"));
    assert!(site.contains(format!("{}", line).as_str()));
}

#[test]
fn unknown_note_name_message() {
    let e: Error = UnknownNoteName {
        site: site!(),
        name: "H",
    }
    .build()
    .into();
    let message = format!("{}", e);
    assert!(message.contains("'H' is not a note name"));
}

#[test]
fn write_error_message() {
    fn foo() -> LibResult<()> {
        use snafu::ResultExt;
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "flerbin");
        Err(io).context(wr!())
    }
    let result = foo();
    assert!(result.is_err());
    let message = format!("{}", result.err().unwrap());
    assert!(message.contains("Error while writing data: flerbin"));
}
