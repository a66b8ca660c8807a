use super::{SortOutcome, Tape};
use crate::error::{Error, Result};
use crate::event::{Entity, Event};

const RADIX: i64 = 10;

fn digit(value: i64, place: i64) -> usize {
    ((value / place) % RADIX) as usize
}

/// LSD radix sort, base 10, with a stable counting pass per digit.
///
/// Each pass records an `Examine` per digit read, an `Update` per element
/// placed in the buffer (scanning from the back), an `Update` per element
/// copied back, and a closing `Boundary`.
pub fn radix_sort(input: &[i64]) -> Result<SortOutcome> {
    if let Some((index, &value)) = input.iter().enumerate().find(|&(_, &v)| v < 0) {
        return Err(Error::NegativeValue { index, value });
    }

    let mut tape = Tape::new("radix sort", input);
    let n = tape.len();
    let max = input.iter().copied().max().unwrap_or(0);
    if n > 0 {
        tape.buffer = Some(vec![0; n]);
    }

    let mut place: i64 = 1;
    let mut pass = 0;
    while max / place > 0 {
        pass += 1;
        let mut count = [0usize; RADIX as usize];
        for i in 0..n {
            let value = tape.values[i];
            let d = digit(value, place);
            count[d] += 1;
            tape.record(
                Event::examine(Entity::Index(i), None),
                format!("Pass {}: digit {} of {}", pass, d, value),
            );
        }
        for d in 1..count.len() {
            count[d] += count[d - 1];
        }

        for i in (0..n).rev() {
            let value = tape.values[i];
            let d = digit(value, place);
            count[d] -= 1;
            tape.write_buffer(count[d], value, Entity::Index(i));
        }
        for i in 0..n {
            tape.restore(i);
        }
        tape.record(
            Event::Boundary { pass },
            format!("Pass {} complete (place value {})", pass, place),
        );

        match place.checked_mul(RADIX) {
            Some(next) => place = next,
            None => break,
        }
    }
    Ok(tape.finish())
}
