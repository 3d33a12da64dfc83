//! NEC 기준 전동기 사이징 계산 모듈 모음.
//! 모두 정적 테이블 위의 순수 함수이며 로그를 남기지 않는다.

pub mod conductor;
pub mod full_load_current;
pub mod locked_rotor;
pub mod protection;

pub use conductor::*;
pub use full_load_current::*;
pub use locked_rotor::*;
pub use protection::*;
