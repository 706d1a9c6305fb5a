use clap::Subcommand;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    #[command(
        about = "Print the last year of precipitation",
        long_about = "Print a date to precipitation map covering the year that ends at the most recent measurement."
    )]
    Precipitation,
    #[command(about = "Print every station identifier")]
    Stations,
    #[command(
        about = "Print the last year of temperature observations",
        long_about = "Print a date to temperature map for the station with the most measurements, covering the year that ends at the most recent measurement."
    )]
    Tobs,
    #[command(
        about = "Print min/avg/max temperature for a date range",
        long_about = "Print TMIN, TAVG and TMAX over the window derived from START (and optionally END). Each date is shifted back by its configured offset before querying."
    )]
    Temps {
        #[arg(value_name = "START", help = "Start date (YYYY-MM-DD)")]
        start: String,
        #[arg(value_name = "END", help = "End date (YYYY-MM-DD)")]
        end: Option<String>,
    },
}
