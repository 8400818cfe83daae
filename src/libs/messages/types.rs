//! Every user-facing message the application can print.
//!
//! Text lives in [`super::display`]; call sites only pick a variant and
//! supply its parameters.

#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleChart,
    ConfigModuleEstimate,
    ConfigModuleGeocoder,
    ConfigModuleServer,
    ConfigModuleLogInfo,

    // === LOG SOURCE MESSAGES ===
    LogsSourceMissing,
    ServerNotConfigured,
    LogsFetched(usize),        // day count
    LogsFileLoaded(String),    // path
    NoLogsAvailable,
    DayOutOfRange(usize, usize), // requested day, day count
    TripFileLoaded(String),    // path
    TripFileMissing(f64),      // fallback average speed
    InvalidDate(String),       // raw input

    // === RENDER MESSAGES ===
    ChartWritten(String), // path
    ChartsWritten(usize), // count

    // === DAY SUMMARY MESSAGES ===
    LogSheetHeader(usize), // day count
    DayNote(usize, String), // day number, note
    DriverInfoHeader,
    ResolvingLocations(usize), // card count
    OfflineGeocoding,

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportFailed(String),    // reason

    // === PROMPTS ===
    PromptSelectModules,
    PromptChartWidth,
    PromptChartHeight,
    PromptLabelWidth,
    PromptAverageSpeed,
    PromptGeocoderUrl,
    PromptGeocoderUserAgent,
    PromptGeocoderZoom,
    PromptServerApiUrl,
    PromptTruckTrailer,
    PromptCarrierName,
    PromptHomeOffice,
    PromptHomeTerminal,
}
