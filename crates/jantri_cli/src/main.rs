mod logging;

use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use jantri_base::Paksh;
use jantri_core::{AstroTimeCalculator, BikramiConverter, GregorianResult};
use jantri_hindu::{HinduCalendar, HinduSchool};
use jantri_time::{
    GregorianDate, gregorian_from_moment, jd_from_gregorian, moment_from_unix, unix_from_moment,
};

#[derive(Parser)]
#[command(name = "jantri", about = "Punjabi jantri calculator")]
struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sun and Moon event times at Amritsar
    AstroTimes {
        /// Instant as Unix epoch seconds (default: now)
        #[arg(long, conflicts_with = "date")]
        unix: Option<i64>,
        /// Instant as UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: Option<String>,
    },
    /// Convert a Bikrami lunar date to the Gregorian calendar
    FromBikrami {
        /// Bikrami year
        year: i32,
        /// Bikrami month (1 = Chet)
        month: i32,
        /// Tithi within the paksh (1-15)
        tithi: i32,
        /// Use the dark half (Vadi) instead of the default Sudi
        #[arg(long)]
        vadi: bool,
        /// Positional school for the day-count arithmetic
        #[arg(long, value_enum, default_value = "surya-siddhanta")]
        school: School,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum School {
    SuryaSiddhanta,
    Modern,
}

impl From<School> for HinduSchool {
    fn from(school: School) -> Self {
        match school {
            School::SuryaSiddhanta => HinduSchool::SuryaSiddhanta,
            School::Modern => HinduSchool::Modern,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::AstroTimes { unix, date } => astro_times(unix, date),
        Command::FromBikrami { year, month, tithi, vadi, school } => {
            from_bikrami(year, month, tithi, vadi, school)
        }
    }
}

fn astro_times(unix: Option<i64>, date: Option<String>) -> Result<()> {
    let instant = match (unix, date) {
        (Some(u), _) => u,
        (None, Some(s)) => parse_utc_to_unix(&s)?,
        (None, None) => now_unix(),
    };
    debug!(instant, "computing astro times");

    let times = AstroTimeCalculator::amritsar().compute_at(instant)?;

    println!("Input:     {}", format_unix(times.input));
    println!("Sunrise:   {}", format_unix(times.sun.sunrise));
    println!("Noon:      {}", format_unix(times.sun.noon));
    println!("Sunset:    {}", format_unix(times.sun.sunset));
    println!("New moon:  {}", format_unix(times.moon.new_moon));
    println!("Full moon: {}", format_unix(times.moon.full_moon));
    println!("Phase:     {} ({})", times.moon.phase.en, times.moon.phase.pa);
    Ok(())
}

fn from_bikrami(year: i32, month: i32, tithi: i32, vadi: bool, school: School) -> Result<()> {
    let paksh = if vadi { Paksh::Vadi } else { Paksh::Sudi };
    let converter = BikramiConverter::new(HinduCalendar::new(school.into()));
    let result = converter.convert(year, month, tithi, paksh);
    debug!(ahargana = result.lunar_date.ahargana, "converted bikrami date");
    print_gregorian(&result);
    Ok(())
}

fn print_gregorian(result: &GregorianResult) {
    let en = &result.lunar_date.english_date;
    let pa = &result.lunar_date.punjabi_date;

    println!(
        "Bikrami:    {} {} {} {}",
        en.month_name, en.paksh, en.tithi, en.year
    );
    println!(
        "Gurmukhi:   {} {} {} {}",
        pa.month_name, pa.paksh, pa.tithi, pa.year
    );
    println!("Gregorian:  {}", result.gregorian_date);
    println!("Julian day: {}", result.julian_day);
    println!("Ahargana:   {}", result.lunar_date.ahargana);
    println!("Pooranmashi: {}", result.lunar_date.pooranmashi);
    if let Some(j) = &result.julian_date {
        println!("Julian date: {} {} {}", j.day, j.month_name, j.year);
    }
}

fn now_unix() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    }
}

fn parse_utc_to_unix(s: &str) -> Result<i64> {
    // Parse "YYYY-MM-DDThh:mm:ssZ" or "YYYY-MM-DDThh:mm:ss"
    let s = s.trim_end_matches('Z');
    let parts: Vec<&str> = s.split('T').collect();
    if parts.len() != 2 {
        bail!("expected YYYY-MM-DDThh:mm:ssZ, got {s}");
    }
    let date_parts: Vec<&str> = parts[0].split('-').collect();
    let time_parts: Vec<&str> = parts[1].split(':').collect();
    if date_parts.len() != 3 || time_parts.len() != 3 {
        bail!("invalid date/time format: {s}");
    }
    let year: i32 = date_parts[0].parse()?;
    let month: u32 = date_parts[1].parse()?;
    let day: u32 = date_parts[2].parse()?;
    let hour: i64 = time_parts[0].parse()?;
    let minute: i64 = time_parts[1].parse()?;
    let second: i64 = time_parts[2].parse()?;

    let jdn = jd_from_gregorian(GregorianDate { year, month, day });
    let rd_midnight = jdn - 1_721_425;
    let day_seconds = hour * 3600 + minute * 60 + second;
    Ok(unix_from_moment(rd_midnight as f64) + day_seconds)
}

fn format_unix(unix: i64) -> String {
    let (date, _) = gregorian_from_moment(moment_from_unix(unix));
    let s = unix.rem_euclid(86_400);
    format!(
        "{}T{:02}:{:02}:{:02}Z",
        date,
        s / 3600,
        (s % 3600) / 60,
        s % 60
    )
}
