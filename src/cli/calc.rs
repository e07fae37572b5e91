use crate::calc;
use crate::error::Result;
use crate::fmt::money;

pub fn emi(amount: f64, rate: f64, years: f64) -> Result<()> {
    let monthly = calc::emi(amount, rate, years)?;
    let months = years * 12.0;
    println!("EMI: {} per month", money(monthly));
    println!("Total payable: {} over {months:.0} months", money(monthly * months));
    println!("Total interest: {}", money(monthly * months - amount));
    Ok(())
}

pub fn sip(amount: f64, rate: f64, years: f64) -> Result<()> {
    let projection = calc::sip(amount, rate, years)?;
    println!("Invested amount:   {}", money(projection.invested));
    println!("Estimated returns: {}", money(projection.gains));
    println!("Future value:      {}", money(projection.future_value));
    Ok(())
}
