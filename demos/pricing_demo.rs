// demos/pricing_demo.rs

//! Demonstration of closed-form Black-Scholes pricing
//!
//! This example shows how to:
//! 1. Build a pricing scenario
//! 2. Price the call and the companion put
//! 3. Inspect the auxiliary d1/d2 quantities
//! 4. Apply display rounding

use anyhow::Result;
use pricer_lib::models::bs::{self, round_to};
use pricer_lib::PricingScenario;

fn main() -> Result<()> {
    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    // The classic worked example: S=30, K=40, 240 days to run
    let scenario = PricingScenario::demo();
    let inputs = scenario.to_inputs()?;

    println!(
        "Contract: {} S={:.2} K={:.2} T={:.4}y r={:.2}% sigma={:.0}%",
        inputs.option_type,
        inputs.underlying_price,
        inputs.strike_price,
        inputs.years_to_exp,
        inputs.r * 100.0,
        inputs.sigma * 100.0
    );

    println!("\nStep 1: Auxiliary quantities...");
    let result = bs::price_detailed(&inputs)?;
    println!("  d1: {:.6}", result.d1);
    println!("  d2: {:.6}", result.d2);

    println!("\nStep 2: Prices...");
    let call = inputs.call_price()?;
    let put = inputs.put_price()?;
    println!("  Call: {:.6}", call);
    println!("  Put:  {:.6}", put);

    // Parity: call - put == S - K * exp(-r*T)
    let forward_gap =
        inputs.underlying_price - inputs.strike_price * (-inputs.r * inputs.years_to_exp).exp();
    println!("\nPut-call parity check:");
    println!("  call - put:        {:.6}", call - put);
    println!("  S - K*exp(-r*T):   {:.6}", forward_gap);

    if let Some(decimals) = scenario.round_to {
        println!("\nOption price is {}", round_to(result.price, decimals));
    }

    Ok(())
}
