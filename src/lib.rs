//! Fileenv - a process launcher that materializes file-backed secrets.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   └── mod           # Flags + resolve-and-launch pipeline driver
//! └── core/             # Core library components
//!     ├── env           # Environment snapshot, scanner, mutator
//!     ├── resolve       # File-based value resolution
//!     └── launch        # Child process execution and status mapping
//! ```
//!
//! Any environment variable whose name ends, case-insensitively, in `_FILE`
//! is treated as a pointer to a secret file: the file is read, trimmed, and
//! bound to the variable name with the suffix stripped. The target program
//! is then spawned with the augmented environment and inherited stdio, and
//! its termination status becomes fileenv's own exit status.
//!
//! This is the standard pattern for injecting secrets via mounted volumes
//! (Docker/Kubernetes secrets) into programs that only read plain
//! environment variables.

pub mod cli;
pub mod core;
pub mod error;
