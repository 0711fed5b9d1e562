//! # Mots Filter
//!
//! Word filtering over a static dictionary of French words.
//!
//! ## Features
//!
//! - **Corpus loading**: one word per line, order and duplicates preserved
//! - **Word set**: deduplicated, unordered view of the corpus
//! - **Length filtering**: words of an exact number of characters
//! - **Substring filtering**: words containing a given string
//! - **Affix filtering**: prefix + suffix + exact length
//! - **Multi-criteria search**: prefix set, required substrings, suffix set, length range
//!
//! Words are opaque character sequences: accents are kept and lengths count
//! characters, so `"été"` has three letters.
//!
//! ## Usage
//!
//! ```bash
//! # Words of 17 letters
//! mots-filter -i corpus.txt length 17
//!
//! # 7-letter words starting and ending with "z"
//! mots-filter affix --start z --end z --length 7
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use mots_filter::{filter_by_affix, filter_containing, to_set};
//! use std::path::Path;
//!
//! let mots = to_set(Path::new("corpus.txt")).unwrap();
//! let sur = filter_by_affix(&mots, "sur", "ons", 17);
//! let with_x = filter_containing(&sur, "x");
//! println!("{:?}", with_x.sorted());
//! ```

pub mod cli;
pub mod corpus;
pub mod error;
pub mod filter;
pub mod output;
pub mod progress;
pub mod session;
pub mod wordset;

pub use cli::Args;
pub use corpus::load;
pub use error::{CorpusError, FilterError};
pub use filter::{
    filter_by_affix, filter_by_length, filter_containing, filter_matching, filter_multi,
};
pub use session::{Session, SessionConfig};
pub use wordset::{to_set, WordSet};
