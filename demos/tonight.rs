use chandrama::{Clock, JulianDate, MoonPhaseCalculator, SystemClock, Time, UT};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let now = SystemClock.now();
    let jd = JulianDate::from_utc(now);
    let ut: Time<UT> = jd.to::<UT>();
    let moon = MoonPhaseCalculator::default().now(&now);

    println!("{now}");
    println!("JD(TT): {jd}  ΔT: {}", ut.delta_t());
    println!("{moon}");
    println!("Elongation: {}", moon.elongation());
    println!(
        "New moon:  {} d ago, in {} d",
        moon.days_since_new_moon().value(),
        moon.days_until_new_moon().value()
    );
    println!(
        "Full moon: {} d ago, in {} d",
        moon.days_since_full_moon().value(),
        moon.days_until_full_moon().value()
    );
}
