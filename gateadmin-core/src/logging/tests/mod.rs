use crate::logging::{LogFormat, init_logging, try_init_logging};

#[test]
fn second_install_reports_an_error() {
    // Arrange
    // Whatever ran first in this process, a global subscriber exists after this.
    init_logging();

    // Act
    let result = try_init_logging(LogFormat::Json);

    // Assert
    assert!(result.is_err());
}
