//! 
//! app.rs
//! 应用主循环
//! 
//! 
//! 
//! 在应用启动时，创建终端并初始化为以下状态：
//! 
//! App {
//! 
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Navigation,                  // 当前焦点在哪个面板
//!     navigation: NavigationState{
//!         items: [Dashboard , Layout , Tokens , Power , Thermal],
//!         selected = 0                                    // 当前选中第几项，默认为 0
//!     },
//!     current_page = Page::Dashboard,                 // 当前应该显示哪个页面
//!     status_message = None,                          // 状态栏消息
//!     facility = FacilityModel::with_seed(seed),      // 设施模型，seed 来自配置或随机
//!     layout = LayoutState::new(),                    // Zone 模式，光标 (0,0)，无选择
//!     viewport = Rect::default(),                     // 每帧绘制时更新
//! 
//! }
//! 
//! 
//! 主循环每 tick_rate_ms（默认 100 ms）最多等待一次事件
//! 应用的主循环中有：
//! loop {
//! 
//!     terminal.draw(|f| {
//!         app.viewport = f.area();                    // 记录终端尺寸，鼠标换算要用
//!         view::render(&app , f)                      // 渲染 UI
//!     })
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入
//!         let msg = handle_event(&event, &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新状态，下一轮立即重绘
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    let tick = Duration::from_millis(app.config.tick_rate_ms.max(1));

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            app.viewport = frame.area();
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件
        if let Some(event) = event::poll_event(tick)? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(&event, app);

            // 5. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}
