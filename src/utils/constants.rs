/// Nombre de la app (logo del landing y cabecera del dashboard)
pub const APP_NAME: &str = "rendAlvous";

/// Etiqueta de última quedada para amigos recién agregados
pub const NEVER_HANGOUT: &str = "Never";

/// Aviso bloqueante tras "enviar" una solicitud de amistad (solo cliente)
pub const REQUEST_SENT_NOTICE: &str = "Request sent!";

// Calendario: mes fijo, sin aritmética de fechas
pub const CALENDAR_MONTH: &str = "October";
pub const DAYS_IN_MONTH: u8 = 31;
pub const WEEKDAY_LABELS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];
pub const EVENT_DAYS: [u8; 9] = [1, 2, 3, 6, 15, 17, 19, 20, 26];

pub const ASSISTANT_GREETING: &str = "Ask me anything!";
