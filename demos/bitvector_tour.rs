//! Example: A Tour of BitVector
//!
//! Demonstrates how to:
//! 1. Build vectors from strings, bit lists and random sources
//! 2. Edit bits, ranges and words in place
//! 3. Combine vectors with boolean algebra and shifts
//! 4. Persist a vector to JSON and binary files

use bitweave::{BitVector, Result};
use rand::SeedableRng;

fn main() -> Result<()> {
    println!("=== BitVector Tour ===\n");

    // ========================================
    // PART 1: Construction
    // ========================================
    println!("Part 1: Construction");

    let from_text: BitVector = "10011001010000011101".parse()?;
    println!("  from text:    {} ({} ones)", from_text, from_text.count_ones());

    let from_list = BitVector::from_bits(&[1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1]);
    println!("  from list:    {} ({} ones)", from_list, from_list.count_ones());

    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let random = BitVector::random(64, &mut rng, 0.25)?;
    println!("  random p=.25: {} ({} ones)", random, random.count_ones());

    let exact = BitVector::random_count(64, &mut rng, 10)?;
    println!("  exactly 10:   {:?}", exact.get_ones());

    // ========================================
    // PART 2: Editing
    // ========================================
    println!("\nPart 2: Editing");

    let mut bv = BitVector::new(96);
    bv.set_range(60, 70)?;
    bv.toggle(0)?;
    bv.set_uint(2, 0xF0F0)?;
    print!("  fields: ");
    bv.print_fields(&mut std::io::stdout())?;
    println!();
    print!("  ones:   ");
    bv.print_one_ids(&mut std::io::stdout())?;
    println!();

    {
        let mut bit = bv.bit_mut(1)?;
        bit |= true;
        bit ^= true;
        println!("  bit 1 after |= true, ^= true: {}", bit.get());
    }

    while let Some(idx) = bv.pop_bit(60) {
        if idx >= 65 {
            break;
        }
    }
    println!("  first one at or after 60: {:?}", bv.find_bit(60));

    // ========================================
    // PART 3: Algebra
    // ========================================
    println!("\nPart 3: Algebra");

    let a: BitVector = "11001010".parse()?;
    let b: BitVector = "10100110".parse()?;
    println!("  a       {}", a);
    println!("  b       {}", b);
    println!("  a & b   {}", &a & &b);
    println!("  a | b   {}", &a | &b);
    println!("  a ^ b   {}", &a ^ &b);
    println!("  a equ b {}", a.equ(&b)?);
    println!("  !a      {}", !&a);
    println!("  a << 3  {}", &a << 3);
    println!("  a >> 3  {}", &a >> 3);
    println!("  a < b   {}", a < b);

    let mut grown = a.clone();
    grown.insert(4, true, 3)?;
    grown.push_back(false);
    println!("  a with 111 inserted at 4, 0 pushed: {}", grown);
    grown.delete(4, 3)?;
    grown.pop_back()?;
    println!("  and removed again:                  {}", grown);

    // ========================================
    // PART 4: Persistence
    // ========================================
    println!("\nPart 4: Persistence");

    let json = random.to_json()?;
    println!("  json: {}", json);

    let path = std::env::temp_dir().join("bitweave_tour.bin");
    random.save(&path)?;
    let restored = BitVector::load(&path)?;
    std::fs::remove_file(&path)?;
    println!("  restored from {}: {}", path.display(), restored == random);

    Ok(())
}
