//! Command line surface.
//!
//! The flags are acknowledgments only: each prints its word before the
//! animation starts and changes nothing else.

use clap::Parser;

#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(
    name = "sl",
    version,
    author = "Marek Szczypiński <markacy@gmail.com>",
    help_template = "{before-help}{name} {version}\n{author-with-newline}{about-with-newline}\n\
                     {usage-heading} {usage}\n\n{all-args}{after-help}",
    about = "cure your bad habit of mistyping",
    long_about = "sl is a highly advanced animation program for curing your bad habit of \
                  mistyping.\nA port of the original sl program written in C by Toyoda Masashi."
)]
pub struct Cli {
    /// An accident is occurring. People cry for help.
    #[arg(short = 'a')]
    pub accident: bool,

    /// Little version
    #[arg(short = 'l')]
    pub little: bool,

    /// It flies like the galaxy express 999.
    #[arg(short = 'F')]
    pub flies: bool,
}

impl Cli {
    /// Words to print before the animation, in flag order.
    pub fn acknowledgments(&self) -> Vec<&'static str> {
        [
            (self.accident, "accident"),
            (self.little, "little"),
            (self.flies, "flies"),
        ]
        .into_iter()
        .filter_map(|(set, word)| set.then_some(word))
        .collect()
    }
}
