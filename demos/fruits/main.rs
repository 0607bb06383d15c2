use anyhow::Result;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use structopt::StructOpt;
use valset::Set;

/// Walks through the operations of the associative set on a pair of fruit/color sets.
#[derive(Debug, Clone, StructOpt)]
#[structopt(name = "valset-fruits", rename_all = "kebab-case")]
pub struct Opt {
    /// Number of random elements to pick from the first set.
    #[structopt(long, default_value = "1")]
    picks: u32,

    /// If set, random picks are drawn from a deterministic generator with this seed
    /// instead of the thread-local one.
    #[structopt(long)]
    seed: Option<u64>,

    /// Logging level to use: one of "error", "warn", "info", "debug", "trace"
    #[structopt(short, long, default_value = "info")]
    log_level: tracing::Level,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();

    // set up logger
    let subscriber = tracing_subscriber::fmt().with_max_level(opt.log_level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut summer: Set<String, String> = Set::new();
    summer.insert("apple".to_string(), "red".to_string());
    summer.insert("banana".to_string(), "yellow".to_string());
    summer.insert("cherry".to_string(), "dark red".to_string());
    summer.insert("brick".to_string(), "red".to_string());

    let mut market: Set<String, String> = Set::new();
    market.insert("apple".to_string(), "green".to_string());
    market.insert("banana".to_string(), "brownish".to_string());
    market.insert("mango".to_string(), "green-orange".to_string());
    market.insert("brick".to_string(), "red".to_string());

    tracing::debug!("built sets of {} and {} entries", summer.len(), market.len());
    market.remove("brick");

    let mut common = summer.intersection(&market);
    println!("in both sets:      {}", common.to_string_with_values());
    println!("size:              {}", common.len());
    println!("contains banana:   {}", common.contains("banana"));
    println!("elements:          {:?}", common.elements());
    println!("same elements:     {}", summer.same_elements(&market));
    println!("subset of summer:  {}", common.is_subset(&summer));

    let with_c = summer.filter(|elem, _| elem.contains('c'));
    println!("with a 'c':        {with_c}");

    let shouted = summer.map(|elem, value| (elem.to_uppercase(), format!("color: {}", value.to_uppercase())));
    println!("shouted:           {}", shouted.to_string_with_values());

    let name_lengths = summer.map_entries(|elem, value| (elem.clone(), value.len()));
    println!("value lengths:     {name_lengths:?}");

    let mut labels = summer.map_to_vec(|elem, value| format!("{elem} is {value}"));
    labels.sort();
    println!("labels:            {labels:?}");

    let reds = summer.fold(0, |acc, _, value| if value.contains("red") { acc + 1 } else { acc });
    println!("red-ish entries:   {reds}");

    let mut rng = opt.seed.map(SmallRng::seed_from_u64);
    for _ in 0..opt.picks {
        let (elem, value) = match rng.as_mut() {
            Some(rng) => summer.pick_random_with(rng)?,
            None => summer.pick_random()?,
        };
        println!("random element:    {elem} (value: {value})");
    }

    common.clear();
    tracing::debug!("cleared the intersection, {} entries left", common.len());
    println!("after clear:       size {}", common.len());

    Ok(())
}
