// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Naive recurrences. No memoization: `fib(n)` makes `2 * fib(n + 1) - 1`
//! calls.

/// The `n`th Fibonacci number: F(0) = 0, F(1) = 1.
pub fn fib(n: u32) -> u64 {
    if n <= 1 {
        return n as u64;
    }
    return fib(n - 1) + fib(n - 2);
}

/// The `n`th Tribonacci number: T(0) = 0, T(1) = T(2) = 1.
pub fn tribonacci(n: u32) -> u64 {
    return match n {
        0 => 0,
        1 | 2 => 1,
        _ => tribonacci(n - 1) + tribonacci(n - 2) + tribonacci(n - 3),
    };
}
