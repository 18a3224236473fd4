// Licensed under the Apache-2.0 license

//! Rule-set construction and text transformation.
//!
//! A [`RuleSet`] is the ordered list of substitutions that converts one
//! instance's driver text into another's. Rules are applied strictly in
//! sequence: each rule rewrites the output of the previous one, not the
//! original text. The order is semantic; in particular the USART4/USART5
//! cleanup rules rely on the peripheral numeral substitutions having
//! already run.

use anyhow::Result;
use regex::Regex;

use crate::instance::UartInstance;

/// A single ordered pattern -> replacement transformation.
#[derive(Clone, Debug)]
pub struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    /// Literal text substitution. The needle is escaped so that regex
    /// metacharacters in C text (the parentheses of the clock-enable call
    /// in particular) match verbatim.
    fn literal(from: &str, to: &str) -> Result<Self> {
        Ok(Rule {
            pattern: Regex::new(&regex::escape(from))?,
            replacement: to.to_string(),
        })
    }

    /// Pattern substitution with a single capture group, re-emitted
    /// through `${1}` in the replacement template.
    fn capture(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Rule {
            pattern: Regex::new(pattern)?,
            replacement: replacement.to_string(),
        })
    }

    /// Replace every non-overlapping match in `text`.
    fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

/// The full ordered list of rules converting one instance's driver text
/// into another's.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Build the rule set converting `uart_src` driver text to `uart_dst`.
    ///
    /// Both identifiers must be in the instance table. Equal identifiers
    /// produce a set in which every rule is a no-op.
    ///
    /// Rule order:
    /// 1. the clock-enable invocation, as one literal;
    /// 2. the peripheral token in its four case/prefix variants;
    /// 3. the DMA controller token;
    /// 4. the `USART4`/`USART5` -> `UART4`/`UART5` naming-exception cleanup,
    ///    which must follow the numeral substitutions of step 2;
    /// 5. for the receive channel and then the transmit channel, the five
    ///    identifier shapes that embed a channel number.
    pub fn build(uart_src: u32, uart_dst: u32) -> Result<RuleSet> {
        let src = UartInstance::lookup(uart_src)?;
        let dst = UartInstance::lookup(uart_dst)?;

        let mut rules = vec![
            Rule::literal(src.clock_enable(), dst.clock_enable())?,
            Rule::literal(&format!("uart{}", src.uart), &format!("uart{}", dst.uart))?,
            Rule::literal(&format!("UART{}", src.uart), &format!("UART{}", dst.uart))?,
            Rule::literal(&format!("usart{}", src.uart), &format!("usart{}", dst.uart))?,
            Rule::literal(&format!("USART{}", src.uart), &format!("USART{}", dst.uart))?,
            Rule::literal(&format!("DMA{}", src.dma), &format!("DMA{}", dst.dma))?,
            // The 4th and 5th peripherals are plain UARTs; step 2 leaves
            // them misnamed when converting across the two families.
            Rule::literal("USART4", "UART4")?,
            Rule::literal("USART5", "UART5")?,
        ];

        for (ch_src, ch_dst) in [
            (src.dma_ch_rx, dst.dma_ch_rx),
            (src.dma_ch_tx, dst.dma_ch_tx),
        ] {
            rules.push(Rule::literal(
                &format!("DMA{}_Channel{}_", src.dma, ch_src),
                &format!("DMA{}_Channel{}_", dst.dma, ch_dst),
            )?);
            rules.push(Rule::literal(
                &format!("LL_DMA_CHANNEL_{ch_src}"),
                &format!("LL_DMA_CHANNEL_{ch_dst}"),
            )?);
            rules.push(Rule::capture(
                &format!("LL_DMA_ClearFlag_([a-zA-Z]+){ch_src}"),
                &format!("LL_DMA_ClearFlag_${{1}}{ch_dst}"),
            )?);
            rules.push(Rule::capture(
                &format!("LL_DMA_IsActiveFlag_([a-zA-Z]+){ch_src}"),
                &format!("LL_DMA_IsActiveFlag_${{1}}{ch_dst}"),
            )?);
            rules.push(Rule::capture(
                &format!(r"DMA_IFCR_(\S+){ch_src}"),
                &format!("DMA_IFCR_${{1}}{ch_dst}"),
            )?);
        }

        Ok(RuleSet { rules })
    }

    /// Apply every rule in order, each replacing all non-overlapping
    /// matches in the current buffer state. Pure; no I/O.
    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |text, rule| rule.apply(&text))
    }

    /// Number of rules in the set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set holds no rules. Never true for a built set.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
