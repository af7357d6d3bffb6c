/// Which of the three mutually exclusive views a `service` invocation shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Only the instance GUID.
    Guid,
    /// Only the instance parameters, as JSON.
    Parameters,
    /// The full multi-section report.
    Details,
}

impl Mode {
    /// `--guid` wins over `--params`; with neither flag the details view is shown.
    pub fn select(show_guid: bool, show_params: bool) -> Self {
        if show_guid {
            Mode::Guid
        } else if show_params {
            Mode::Parameters
        } else {
            Mode::Details
        }
    }
}
