use meteo::{
    day_mean, last_n_days, night_mean, rainy_weekend_count, resample_to_five_minutes,
    stitch_forecast_after_history, years_before, HttpTransport, MeteoClient, MeteoError,
    WeatherSession,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), MeteoError> {
    let client = MeteoClient::builder()
        .transport(HttpTransport::new(Duration::from_secs(15))?)
        .base_url("https://api.meteo.lt/v1")
        .station("vilniaus-ams")
        .place("vilnius")
        .build();

    let today = client.today();
    let start = years_before(today, 1).unwrap_or(today);
    let mut session = WeatherSession::new(client, start.to_string(), today.to_string());

    let history = session.fetch_history().await?.clone();
    session.fetch_forecast().await?;

    let metric = "airTemperature";
    if let Some(mean) = day_mean(&history, metric)? {
        println!("Mean day {metric} - {mean:.2}");
    }
    if let Some(mean) = night_mean(&history, metric)? {
        println!("Mean night {metric} - {mean:.2}");
    }
    println!(
        "Weekends with rain on at least one day: {}",
        rainy_weekend_count(&history)
    );

    let recent = last_n_days(session.history_metric(metric)?, 7);
    let forecast = stitch_forecast_after_history(&recent, session.forecast_metric(metric)?);
    let recent = resample_to_five_minutes(&recent);
    let forecast = resample_to_five_minutes(&forecast);

    println!("{}", recent.to_frame()?.tail(Some(5)));
    println!("{}", forecast.to_frame()?.head(Some(5)));
    Ok(())
}
