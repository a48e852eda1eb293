/// Port used when neither the config file nor `PORT` sets one.
pub const DEFAULT_PORT: u16 = 4001;

pub const LIVENESS_MESSAGE: &str = "Anime collection API is running!";

pub mod metric_names {

    pub const ANIME_RECORDS: &str = "anime_records";

    pub const ANIME_CREATED: &str = "anime_created_total";

    pub const ANIME_UPDATED: &str = "anime_updated_total";

    pub const ANIME_DELETED: &str = "anime_deleted_total";

    pub const API_REQUESTS: &str = "api_requests_total";

    pub const API_REQUEST_SECONDS: &str = "api_request_duration_seconds";
}
