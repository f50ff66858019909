//! Full example code for printing to an SSD1306 display. This runs on an STM32F303RE, using a
//! common 128x64 I2C module connected to I2C1 on PB6 (SCL) and PB7 (SDA).

#![deny(unsafe_code)]
#![no_main]
#![no_std]

extern crate cortex_m;
extern crate stm32f30x;
extern crate stm32f30x_hal as hal;
#[macro_use]
extern crate cortex_m_rt;
extern crate panic_abort;
extern crate ssd1306_text;

use cortex_m::asm;
use cortex_m_rt::ExceptionFrame;
use hal::i2c::I2c;
use hal::prelude::*;
use ssd1306_text as oled;

entry!(main);

exception!(*, default_handler);
exception!(HardFault, hard_fault);

fn hard_fault(_ef: &ExceptionFrame) -> ! {
    asm::bkpt();
    loop {}
}

fn default_handler(_irqn: i16) {
    loop {}
}

fn main() -> ! {
    // Get peripherals and set up RCC.
    let cp = cortex_m::Peripherals::take().unwrap();
    let dp = stm32f30x::Peripherals::take().unwrap();

    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze(&mut flash.acr);
    let mut delay = hal::delay::Delay::new(cp.SYST, clocks);

    // I2C1 is Alternate Function 4 for GPIOs PB6,7.
    let mut gpiob = dp.GPIOB.split(&mut rcc.ahb);
    let scl = gpiob.pb6.into_af4(&mut gpiob.moder, &mut gpiob.afrl);
    let sda = gpiob.pb7.into_af4(&mut gpiob.moder, &mut gpiob.afrl);
    let i2c = I2c::i2c1(dp.I2C1, (scl, sda), 400.khz(), clocks, &mut rcc.apb1);

    let mut disp = oled::Display::new(oled::I2cInterface::new(i2c), oled::DisplaySize::W128H64);

    // The controller needs a moment after power-up before it accepts commands.
    delay.delay_ms(100_u16);

    disp.init(oled::Config::default()).unwrap();
    disp.clear().unwrap();

    {
        let mut text = disp.text();
        text.print_centered("Hello everyone!", 1).unwrap();
        text.print("ça marche très bien", 3, 0).unwrap();
        text.print_bounded("wrapped inside a narrow box", 5, 32, 64)
            .unwrap();
    }

    // Scroll a long line across the bottom page forever.
    let banner = "Bonjour à tous, voilà un texte qui défile";
    let mut offset = 0u16;
    loop {
        disp.text().marquee(banner, 7, 0, 0, offset).unwrap();
        offset = (offset + 6) % (6 * 44);
        delay.delay_ms(150_u16);
    }
}
