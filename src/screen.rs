//! # OLED Screen Module
//!
//! SSD1306 128x64 monochrome OLED on the edge connector's I2C pins, drawn in
//! buffered mode with `embedded-graphics`. Shapes go to the RAM frame buffer;
//! nothing reaches the panel until [`Renderer::present`] flushes it.
use crate::*;

/// The display driver in buffered mode over TWIM0.
pub type Oled = Ssd1306<
    I2CInterface<Twim<'static, TWISPI0>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// [`Renderer`] backed by the SSD1306.
pub struct Screen {
    display: Oled,
}

impl Screen {
    /// Initializes the panel at I2C address 0x3C.
    ///
    /// An init failure is logged; drawing continues and each later flush
    /// reports its own error.
    pub fn new(i2c: Twim<'static, TWISPI0>) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        if let Err(e) = display.init() {
            rprintln!("screen: init failed: {:?}", e);
        }
        Self { display }
    }

    fn draw(&mut self, rect: Rect, style: PrimitiveStyle<BinaryColor>) {
        let top_left = Point::new(i32::from(rect.x), i32::from(rect.y));
        let size = Size::new(u32::from(rect.width), u32::from(rect.height));
        // Drawing into the frame buffer cannot fail.
        let _ = Rectangle::new(top_left, size)
            .into_styled(style)
            .draw(&mut self.display);
    }
}

impl Renderer for Screen {
    fn clear(&mut self) {
        self.display.clear_buffer();
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.draw(rect, PrimitiveStyle::with_fill(BinaryColor::On));
    }

    fn outline_rect(&mut self, rect: Rect) {
        self.draw(rect, PrimitiveStyle::with_stroke(BinaryColor::On, 1));
    }

    fn present(&mut self) {
        if let Err(e) = self.display.flush() {
            rprintln!("screen: flush failed: {:?}", e);
        }
    }
}
