// Licensed under the Apache-2.0 license

//! UART driver instance generator.
//!
//! This crate rewrites the driver source/header pair of one UART/USART
//! hardware instance into the pair for another instance by applying an
//! ordered list of text substitutions (peripheral name, clock-enable call,
//! DMA controller and channel numbers, flag macros). The C text is treated
//! as opaque; the generated output is only as correct as the template.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//! use uart_generator::generate_all;
//!
//! // Regenerate the UART2 and UART3 drivers from the UART1 files under
//! // `<root>/Core/Inc` and `<root>/Core/Src`.
//! generate_all(Path::new("."), 1, &[2, 3]).unwrap();
//! ```
//!
//! ## Module Organization
//!
//! - [`instance`]: The fixed table of known UART instances and their DMA wiring
//! - [`rules`]: Rule-set construction and text transformation
//! - [`generate`]: File pair paths and filesystem processing

pub mod generate;
pub mod instance;
pub mod rules;

// Re-export main public API
pub use generate::{generate, generate_all, header_path, source_path};
pub use instance::UartInstance;
pub use rules::RuleSet;
