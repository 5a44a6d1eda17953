//! Minimal command-line pricer.
//!
//! Prices one European option and prints the result, exiting nonzero with a
//! diagnostic on invalid input:
//!
//! ```text
//! price <call|put> <S> <K> <T> <r> <sigma> [--round N]
//! price --scenario <file.toml>
//! ```

use anyhow::{bail, Context, Result};
use pricer_lib::{
    price_european, price_european_rounded, OptionType, PricingInputs, PricingScenario,
};

const USAGE: &str = "usage: price <call|put> <S> <K> <T> <r> <sigma> [--round N]\n       price --scenario <file.toml>";

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [flag, path] if flag == "--scenario" => run_scenario(path),
        rest if rest.len() >= 6 => run_inline(rest),
        _ => bail!("{USAGE}"),
    }
}

fn run_scenario(path: &str) -> Result<()> {
    let scenario = PricingScenario::from_toml_path(path)?;
    let inputs = scenario.to_inputs()?;
    match scenario.round_to {
        Some(decimals) => println!("{}", price_european_rounded(&inputs, decimals)?),
        None => println!("{}", price_european(&inputs)?),
    }
    Ok(())
}

fn run_inline(args: &[String]) -> Result<()> {
    let option_type: OptionType = args[0].parse()?;

    let names = ["S", "K", "T", "r", "sigma"];
    let mut values = [0.0_f64; 5];
    for (value, (raw, name)) in values.iter_mut().zip(args[1..6].iter().zip(names)) {
        *value = raw
            .parse()
            .with_context(|| format!("invalid number for {name}: {raw:?}"))?;
    }
    let [s, k, t, r, sigma] = values;

    let round_to = match &args[6..] {
        [] => None,
        [flag, n] if flag == "--round" => Some(
            n.parse::<u32>()
                .with_context(|| format!("invalid decimal count for --round: {n:?}"))?,
        ),
        _ => bail!("{USAGE}"),
    };

    let inputs = PricingInputs::new(option_type, s, k, t, r, sigma);
    match round_to {
        Some(decimals) => println!("{}", price_european_rounded(&inputs, decimals)?),
        None => println!("{}", price_european(&inputs)?),
    }
    Ok(())
}
