use rust_decimal::Decimal;

/// Running balance after each flow: `balances[i] = balances[i - 1] + flows[i]`,
/// starting from `initial_balance`. Output has the same length as `flows`.
pub fn accumulate(initial_balance: Decimal, flows: &[Decimal]) -> Vec<Decimal> {
    flows
        .iter()
        .scan(initial_balance, |balance, flow| {
            *balance += *flow;
            Some(*balance)
        })
        .collect()
}
